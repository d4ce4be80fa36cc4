//! Settings document codec
//!
//! Settings persist as a flat text document, one `key = value` line per
//! field:
//!
//! ```text
//! # pneuma settings
//! total_duration = 10
//! half_seconds_in = 8
//! half_seconds_hold = 0
//! half_seconds_out = 12
//! half_seconds_stay = 4
//! ```
//!
//! Blank lines, `#` comments and unknown keys are ignored. Fields missing
//! from the document keep the value of the base settings passed to
//! [`decode`].

use core::fmt::Write;

use heapless::String;

use super::phase::Phase;
use super::types::BreathingSettings;

/// Capacity of an encoded document
pub const DOCUMENT_CAPACITY: usize = 192;

/// Encoded settings document
pub type Document = String<DOCUMENT_CAPACITY>;

const KEY_TOTAL_DURATION: &str = "total_duration";

/// Document key for each phase, indexed by [`Phase::index`]
const PHASE_KEYS: [&str; 4] = [
    "half_seconds_in",
    "half_seconds_hold",
    "half_seconds_out",
    "half_seconds_stay",
];

/// Document codec errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DocumentError {
    /// A non-comment line without `key = value` shape
    MalformedLine,
    /// A known key with a non-numeric value
    InvalidValue,
    /// A value outside the editable range
    OutOfRange,
    /// No known key in the whole document
    Empty,
    /// Encoded text exceeded [`DOCUMENT_CAPACITY`]
    TooLong,
}

/// Encode settings as a document
pub fn encode(settings: &BreathingSettings) -> Result<Document, DocumentError> {
    let mut doc = Document::new();
    write_document(&mut doc, settings).map_err(|_| DocumentError::TooLong)?;
    Ok(doc)
}

fn write_document(doc: &mut Document, settings: &BreathingSettings) -> core::fmt::Result {
    writeln!(doc, "# pneuma settings")?;
    writeln!(doc, "{} = {}", KEY_TOTAL_DURATION, settings.total_duration)?;
    for phase in Phase::CYCLE {
        writeln!(
            doc,
            "{} = {}",
            PHASE_KEYS[phase.index()],
            settings.half_seconds(phase)
        )?;
    }
    Ok(())
}

/// Decode a document on top of `base`
///
/// `base` is never modified. On error the caller still holds its previous
/// settings untouched.
pub fn decode(text: &str, base: &BreathingSettings) -> Result<BreathingSettings, DocumentError> {
    let mut settings = *base;
    let mut seen = false;

    for line in text.lines() {
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let (key, value) = parse_key_value(line).ok_or(DocumentError::MalformedLine)?;

        if key == KEY_TOTAL_DURATION {
            settings.total_duration = parse_u16(value)?;
            seen = true;
        } else if let Some(phase) = phase_for_key(key) {
            settings.set_half_seconds(phase, parse_u16(value)?);
            seen = true;
        }
    }

    if !seen {
        return Err(DocumentError::Empty);
    }
    if !settings.is_valid() {
        return Err(DocumentError::OutOfRange);
    }

    Ok(settings)
}

fn phase_for_key(key: &str) -> Option<Phase> {
    PHASE_KEYS
        .iter()
        .position(|&k| k == key)
        .map(|i| Phase::CYCLE[i])
}

/// Split `key = value`, dropping a trailing `# comment`
fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once('=')?;
    let key = key.trim();
    let value = match value.find('#') {
        Some(hash_pos) => value[..hash_pos].trim(),
        None => value.trim(),
    };

    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some((key, value))
}

fn parse_u16(value: &str) -> Result<u16, DocumentError> {
    value.parse().map_err(|_| DocumentError::InvalidValue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Preset;

    #[test]
    fn test_encode_defaults() {
        let doc = encode(&BreathingSettings::default()).unwrap();
        assert!(doc.contains("total_duration = 10\n"));
        assert!(doc.contains("half_seconds_in = 8\n"));
        assert!(doc.contains("half_seconds_hold = 0\n"));
        assert!(doc.contains("half_seconds_out = 12\n"));
        assert!(doc.contains("half_seconds_stay = 4\n"));
    }

    #[test]
    fn test_decode_encoded() {
        let mut settings = BreathingSettings::default();
        settings.total_duration = 25;
        settings.apply_preset(Preset::FourSevenEight);

        let doc = encode(&settings).unwrap();
        let decoded = decode(&doc, &BreathingSettings::default()).unwrap();
        assert_eq!(decoded, settings);
    }

    #[test]
    fn test_comments_and_unknown_keys() {
        let text = "\
# saved by hand
total_duration = 3   # minutes
colour = \"teal\"

half_seconds_out = 20
";
        let decoded = decode(text, &BreathingSettings::default()).unwrap();
        assert_eq!(decoded.total_duration, 3);
        assert_eq!(decoded.half_seconds(Phase::Out), 20);
        // Missing keys keep the base values
        assert_eq!(decoded.half_seconds(Phase::In), 8);
        assert_eq!(decoded.half_seconds(Phase::Stay), 4);
    }

    #[test]
    fn test_malformed_line() {
        let text = "total_duration = 5\nthis is not a setting\n";
        assert_eq!(
            decode(text, &BreathingSettings::default()),
            Err(DocumentError::MalformedLine)
        );
    }

    #[test]
    fn test_invalid_value() {
        assert_eq!(
            decode("half_seconds_in = four", &BreathingSettings::default()),
            Err(DocumentError::InvalidValue)
        );
        assert_eq!(
            decode("half_seconds_in = -2", &BreathingSettings::default()),
            Err(DocumentError::InvalidValue)
        );
    }

    #[test]
    fn test_out_of_range() {
        let base = BreathingSettings::default();
        assert_eq!(
            decode("total_duration = 0", &base),
            Err(DocumentError::OutOfRange)
        );
        assert_eq!(
            decode("half_seconds_out = 0", &base),
            Err(DocumentError::OutOfRange)
        );
        assert!(decode("half_seconds_stay = 0", &base).is_ok());
    }

    #[test]
    fn test_empty_document() {
        let base = BreathingSettings::default();
        assert_eq!(decode("", &base), Err(DocumentError::Empty));
        assert_eq!(decode("# nothing\n\n", &base), Err(DocumentError::Empty));
        assert_eq!(decode("volume = 3", &base), Err(DocumentError::Empty));
    }

    #[test]
    fn test_failed_decode_leaves_base_alone() {
        let mut base = BreathingSettings::default();
        base.total_duration = 7;
        let before = base;

        let result = decode("total_duration = 30\nhalf_seconds_in = x\n", &base);
        assert!(result.is_err());
        assert_eq!(base, before);
    }

    #[test]
    fn test_parse_key_value() {
        assert_eq!(parse_key_value("a = 1"), Some(("a", "1")));
        assert_eq!(parse_key_value("a=1 # note"), Some(("a", "1")));
        assert_eq!(parse_key_value("a = "), None);
        assert_eq!(parse_key_value("= 1"), None);
        assert_eq!(parse_key_value("a 1"), None);
    }
}
