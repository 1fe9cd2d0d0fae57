//! Command-line argument parsing
//!
//! Every option overrides the saved configuration for this session only
//! (the overridden values are saved again on exit like any other change).

use clap::{Parser, ValueEnum};

use crate::config::RulerConfig;
use crate::model::RulerPosition;
use crate::units::Units;

/// An on-screen ruler
#[derive(Parser, Debug, Default)]
#[command(name = "pixruler", version, about = "An on-screen ruler")]
pub struct CliArgs {
    /// Screen edge the scale faces
    #[arg(short, long, value_enum)]
    pub position: Option<PositionArg>,

    /// Unit of measurement
    #[arg(short, long, value_enum)]
    pub units: Option<UnitsArg>,

    /// Ruler length in pixels
    #[arg(short, long, value_name = "PIXELS")]
    pub length: Option<u32>,

    /// Keep the ruler above other windows
    #[arg(long)]
    pub on_top: bool,

    /// Ignore the saved configuration and start from defaults
    #[arg(long)]
    pub reset: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PositionArg {
    Left,
    Top,
    Right,
    Bottom,
}

impl From<PositionArg> for RulerPosition {
    fn from(value: PositionArg) -> Self {
        match value {
            PositionArg::Left => RulerPosition::Left,
            PositionArg::Top => RulerPosition::Top,
            PositionArg::Right => RulerPosition::Right,
            PositionArg::Bottom => RulerPosition::Bottom,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum UnitsArg {
    #[value(name = "px", alias = "pixels")]
    Pixels,
    #[value(name = "cm", alias = "centimetres")]
    Centimetres,
    #[value(name = "in", alias = "inches")]
    Inches,
    #[value(name = "pica", alias = "picas")]
    Picas,
}

impl From<UnitsArg> for Units {
    fn from(value: UnitsArg) -> Self {
        match value {
            UnitsArg::Pixels => Units::Pixels,
            UnitsArg::Centimetres => Units::Centimetres,
            UnitsArg::Inches => Units::Inches,
            UnitsArg::Picas => Units::Picas,
        }
    }
}

impl CliArgs {
    /// Apply the overrides on top of a loaded config
    pub fn apply(&self, mut config: RulerConfig) -> RulerConfig {
        if self.reset {
            config = RulerConfig::default();
        }
        if let Some(position) = self.position {
            config.position = position.into();
        }
        if let Some(units) = self.units {
            config.units = units.into();
        }
        if let Some(length) = self.length {
            config.length = length;
        }
        if self.on_top {
            config.always_on_top = true;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_short_unit_names() {
        let args = CliArgs::try_parse_from(["pixruler", "--units", "cm", "-p", "left"]).unwrap();
        assert_eq!(args.units, Some(UnitsArg::Centimetres));
        assert_eq!(args.position, Some(PositionArg::Left));
    }

    #[test]
    fn test_unit_aliases() {
        let args = CliArgs::try_parse_from(["pixruler", "--units", "inches"]).unwrap();
        assert_eq!(args.units, Some(UnitsArg::Inches));
    }

    #[test]
    fn test_rejects_unknown_position() {
        assert!(CliArgs::try_parse_from(["pixruler", "--position", "diagonal"]).is_err());
    }

    #[test]
    fn test_overrides_config() {
        let args = CliArgs {
            units: Some(UnitsArg::Picas),
            length: Some(300),
            ..Default::default()
        };
        let config = args.apply(RulerConfig {
            units: Units::Inches,
            always_on_top: false,
            ..Default::default()
        });
        assert_eq!(config.units, Units::Picas);
        assert_eq!(config.length, 300);
        assert!(!config.always_on_top);
    }

    #[test]
    fn test_reset_discards_saved_values() {
        let args = CliArgs {
            reset: true,
            ..Default::default()
        };
        let config = args.apply(RulerConfig {
            length: 999,
            position: RulerPosition::Bottom,
            ..Default::default()
        });
        assert_eq!(config, RulerConfig::default());
    }
}
