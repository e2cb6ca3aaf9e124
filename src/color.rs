extern crate termcolor;

use std::io::Write;
use termcolor::{Color, ColorSpec, StandardStream, WriteColor};

macro_rules! get_version {
    ($file:expr) => {
        concat!(
            env!("CARGO_PKG_VERSION"),
            " ",
            include_str!(concat!(env!("OUT_DIR"), "/", $file))
        )
    };
}

pub fn set_fg(stdout: &mut StandardStream, color: Option<Color>) {
    stdout
        .set_color(ColorSpec::new().set_fg(color).set_intense(true))
        .expect("Error: can't set output color");
}

macro_rules! write_color {
    ($dest:expr, $color:expr, $typ:expr, $($arg:tt)*) => { {
        $crate::color::set_fg($dest, Some($color));
        write!($dest, "{:>8}: ", $typ);
        $crate::color::set_fg($dest, None);
        writeln!($dest, $($arg)*).expect("Failed to write output");
    }
    };
}

macro_rules! write_error {
    ($dest:expr, $typ:expr, $($arg:tt)*) => {
        write_color!($dest, Color::Red, $typ, $($arg)*)
    };
}

macro_rules! write_warn {
    ($dest:expr, $typ:expr, $($arg:tt)*) => {
        write_color!($dest, Color::Yellow, $typ, $($arg)*)
    };
}

macro_rules! write_info {
    ($dest:expr, $typ:expr, $($arg:tt)*) => {
        write_color!($dest, Color::Blue, $typ, $($arg)*)
    };
}

macro_rules! write_ok {
    ($dest:expr, $typ:expr, $($arg:tt)*) => {
        write_color!($dest, Color::Green, $typ, $($arg)*)
    };
}

macro_rules! write_progress {
    ($dest:expr, $typ:expr, $($arg:tt)*) => {
        write_color!($dest, Color::Cyan, $typ, $($arg)*)
    };
}

/// Writes multi-line text indented under a `write_color!` label.
pub fn write_block(stdout: &mut StandardStream, color: Option<Color>, text: &str) {
    set_fg(stdout, color);
    for line in text.lines() {
        writeln!(stdout, "{:>10}{}", "", line).expect("Failed to write output");
    }
    set_fg(stdout, None);
}

#[cfg(test)]
mod tests {
    use super::*;
    use termcolor::ColorChoice;

    #[test]
    #[allow(unused_must_use)]
    fn labelled_writers_are_expressions() {
        let mut stdout = StandardStream::stdout(ColorChoice::Never);
        for &passed in [true, false].iter() {
            match passed {
                true => write_ok!(&mut stdout, "Passed", "case {}", 1),
                false => write_warn!(&mut stdout, "Differs", "case {}", 2),
            }
        }
        let unit: () = write_info!(&mut stdout, "Info", "done");
        assert_eq!(unit, ());
        write_block(&mut stdout, Some(Color::Cyan), "a\nb");
    }
}
