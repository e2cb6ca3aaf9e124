extern crate reqwest;

use crate::{
    config::client::USER_AGENT,
    error::{Error, Kind, Result},
};
use reqwest::Client;
use std::time::Duration;

/// Client shared by the problem bank and the compiler. `None` leaves
/// requests without a deadline.
pub(crate) fn client(timeout: Option<Duration>) -> Result<Client> {
    let builder = Client::builder().user_agent(USER_AGENT);
    let builder = match timeout {
        Some(t) => builder.timeout(t),
        None => builder,
    };
    builder
        .build()
        .map_err(|e| Error::with_kind(Kind::Builder(e)))
}
