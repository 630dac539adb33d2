//! Line-oriented angle input, as piped into the binary.
//!
//! A line holds whitespace-separated `field=value` tokens. A bare number sets
//! the default field and `field=-` clears a field.

use crate::error::ReadingError;
use crate::InstrumentCommand;

pub fn parse_line(line: &str, default_field: &str) -> Vec<Result<InstrumentCommand, ReadingError>> {
    line.split_whitespace()
        .map(|token| parse_token(token, default_field))
        .collect()
}

fn parse_token(token: &str, default_field: &str) -> Result<InstrumentCommand, ReadingError> {
    let (field, value) = match token.split_once('=') {
        Some((field, value)) => (field.trim(), value.trim()),
        None => (default_field, token),
    };
    if field.is_empty() {
        return Err(ReadingError::EmptyField(token.to_string()));
    }
    if value == "-" {
        return Ok(InstrumentCommand::ClearField(field.to_string()));
    }
    match value.parse::<f64>() {
        Ok(angle) if angle.is_finite() => Ok(InstrumentCommand::SetField(field.to_string(), angle)),
        _ => Err(ReadingError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_named_and_bare_values() {
        let parsed = parse_line("  271.5 true_wind=40 apparent_wind=-", "heading");
        assert_eq!(
            parsed,
            vec![
                Ok(InstrumentCommand::SetField("heading".into(), 271.5)),
                Ok(InstrumentCommand::SetField("true_wind".into(), 40.0)),
                Ok(InstrumentCommand::ClearField("apparent_wind".into())),
            ]
        );
    }

    #[test]
    fn reports_bad_tokens() {
        let parsed = parse_line("=5 heading=north twa=NaN", "heading");
        assert_eq!(parsed[0], Err(ReadingError::EmptyField("=5".into())));
        assert_eq!(
            parsed[1],
            Err(ReadingError::InvalidValue {
                field: "heading".into(),
                value: "north".into(),
            })
        );
        assert!(parsed[2].is_err());
    }

    #[test]
    fn blank_line_is_empty() {
        assert!(parse_line("   ", "heading").is_empty());
    }
}
