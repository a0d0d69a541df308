//! Assembling one validated operation from the parsed command line.
//!
//! The flags select an operation; this module gathers its companion
//! parameters, parses the dotted literals, and hands back a tagged value the
//! runner consumes by `match`. Parameter-domain checks the drawing layer owns
//! (radius positivity, value range, part counts) stay there; this layer only
//! enforces presence and literal syntax.

use std::str::FromStr;

use bmpkit_codec::Rgb;
use bmpkit_raster::Channel;

use crate::{Cli, CliError, parse};

/// One fully validated request, ready to dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Report the decoded header fields; no mutation, no output file.
    Info,
    /// Draw an annular circle, optionally filled.
    Circle {
        /// Center in bottom-left-origin user coordinates, not yet flipped.
        center: (i32, i32),
        /// Ring radius in pixels.
        radius: i32,
        /// Ring band thickness.
        thickness: i32,
        /// Ring color.
        color: Rgb,
        /// Interior fill color, when filling was requested.
        fill: Option<Rgb>,
    },
    /// Split the frame with divider lines.
    Divide {
        /// Number of horizontal parts.
        count_x: i32,
        /// Number of vertical parts.
        count_y: i32,
        /// Divider thickness.
        thickness: i32,
        /// Divider color.
        color: Rgb,
    },
    /// Override one color channel image-wide.
    Filter {
        /// The channel to overwrite.
        channel: Channel,
        /// The value to store, validated by the filter itself.
        value: i32,
    },
}

impl Operation {
    /// Build the selected operation from the parsed flags.
    ///
    /// `--info` wins over any editing flag. Otherwise exactly one of
    /// `--circle`, `--rgbfilter`, `--split` must be set.
    ///
    /// # Errors
    ///
    /// [`CliError::Usage`] when no operation (or more than one) is selected;
    /// [`CliError::BadValue`] for a missing companion parameter or a
    /// malformed literal.
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        if cli.info {
            return Ok(Self::Info);
        }
        match (cli.circle, cli.rgbfilter, cli.split) {
            (true, false, false) => Self::circle(cli),
            (false, true, false) => Self::filter(cli),
            (false, false, true) => Self::divide(cli),
            (false, false, false) => Err(CliError::Usage("no operation selected".into())),
            _ => Err(CliError::Usage(
                "only one operation may be selected per invocation".into(),
            )),
        }
    }

    fn circle(cli: &Cli) -> Result<Self, CliError> {
        let center = parse::center(required(cli.center.as_deref(), "--center")?)
            .map_err(CliError::BadValue)?;
        let color =
            parse::color(required(cli.color.as_deref(), "--color")?).map_err(CliError::BadValue)?;
        let fill = if cli.fill {
            let literal = cli
                .fill_color
                .as_deref()
                .ok_or_else(|| CliError::BadValue("no fill color given".into()))?;
            Some(parse::color(literal).map_err(CliError::BadValue)?)
        } else {
            None
        };
        Ok(Self::Circle {
            center,
            radius: required(cli.radius, "--radius")?,
            thickness: required(cli.thickness, "--thickness")?,
            color,
            fill,
        })
    }

    fn filter(cli: &Cli) -> Result<Self, CliError> {
        let name = required(cli.component_name.as_deref(), "--component_name")?;
        let channel = Channel::from_str(name).map_err(|_| {
            CliError::BadValue(format!(
                "invalid component name '{name}' (red, green, or blue expected)"
            ))
        })?;
        Ok(Self::Filter {
            channel,
            value: required(cli.component_value, "--component_value")?,
        })
    }

    fn divide(cli: &Cli) -> Result<Self, CliError> {
        let color =
            parse::color(required(cli.color.as_deref(), "--color")?).map_err(CliError::BadValue)?;
        Ok(Self::Divide {
            count_x: required(cli.number_x, "--number_x")?,
            count_y: required(cli.number_y, "--number_y")?,
            thickness: required(cli.thickness, "--thickness")?,
            color,
        })
    }
}

fn required<T>(value: Option<T>, flag: &str) -> Result<T, CliError> {
    value.ok_or_else(|| CliError::BadValue(format!("{flag} is required for this operation")))
}

#[cfg(test)]
mod tests {
    use super::Operation;
    use crate::{Cli, CliError};
    use bmpkit_codec::Rgb;
    use bmpkit_raster::Channel;
    use clap::Parser;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("bmpkit").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_builds_a_circle_operation() {
        let cli = cli(&[
            "-I", "in.bmp", "-c", "--center", "100.50", "--radius", "50", "--thickness", "3",
            "--color", "255.0.0",
        ]);
        let op = Operation::from_cli(&cli).unwrap();
        assert_eq!(
            op,
            Operation::Circle {
                center: (100, 50),
                radius: 50,
                thickness: 3,
                color: Rgb::new(255, 0, 0),
                fill: None,
            }
        );
    }

    #[test]
    fn test_fill_requires_a_fill_color() {
        let cli = cli(&[
            "-c", "--center", "10.10", "--radius", "5", "--thickness", "1", "--color", "0.0.0",
            "--fill",
        ]);
        let err = Operation::from_cli(&cli).unwrap_err();
        assert!(matches!(err, CliError::BadValue(msg) if msg.contains("fill color")));
    }

    #[test]
    fn test_builds_a_filter_operation() {
        let cli = cli(&["-f", "--component_name", "green", "--component_value", "128"]);
        let op = Operation::from_cli(&cli).unwrap();
        assert_eq!(
            op,
            Operation::Filter {
                channel: Channel::Green,
                value: 128,
            }
        );
    }

    #[test]
    fn test_rejects_unknown_component_names() {
        let cli = cli(&["-f", "--component_name", "purple", "--component_value", "1"]);
        assert!(matches!(
            Operation::from_cli(&cli),
            Err(CliError::BadValue(_))
        ));
    }

    #[test]
    fn test_builds_a_divide_operation() {
        let cli = cli(&[
            "-s", "--number_x", "4", "--number_y", "3", "--thickness", "10", "--color", "0.0.0",
        ]);
        let op = Operation::from_cli(&cli).unwrap();
        assert_eq!(
            op,
            Operation::Divide {
                count_x: 4,
                count_y: 3,
                thickness: 10,
                color: Rgb::new(0, 0, 0),
            }
        );
    }

    #[test]
    fn test_no_operation_is_a_usage_error() {
        let cli = cli(&["-I", "in.bmp"]);
        assert!(matches!(
            Operation::from_cli(&cli),
            Err(CliError::Usage(_))
        ));
    }

    #[test]
    fn test_two_operations_are_a_usage_error() {
        let cli = cli(&["-c", "-s"]);
        assert!(matches!(
            Operation::from_cli(&cli),
            Err(CliError::Usage(_))
        ));
    }

    #[test]
    fn test_info_wins_over_editing_flags() {
        let cli = cli(&["--info", "-c", "in.bmp"]);
        assert_eq!(Operation::from_cli(&cli).unwrap(), Operation::Info);
    }
}
