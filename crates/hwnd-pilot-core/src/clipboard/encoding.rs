use encoding_rs::Encoding;

use super::errors::ClipboardError;

/// Label of the encoding used when the caller does not pick one
pub const DEFAULT_ENCODING_LABEL: &str = "gbk";

/// A byte encoding for clipboard text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextEncoding(&'static Encoding);

impl TextEncoding {
    /// Resolve a WHATWG encoding label such as `gbk`, `utf-8` or `shift_jis`.
    ///
    /// Encodings that `encoding_rs` can only decode (UTF-16 and the
    /// `replacement` encoding) are rejected, since text written with them
    /// would not read back unchanged.
    pub fn from_label(label: &str) -> Result<Self, ClipboardError> {
        let encoding = Encoding::for_label(label.trim().as_bytes()).ok_or_else(|| {
            ClipboardError::UnknownEncoding {
                label: label.to_string(),
            }
        })?;
        if encoding.output_encoding() != encoding {
            return Err(ClipboardError::UnsupportedEncoding {
                label: label.to_string(),
                encoding: encoding.name(),
            });
        }
        Ok(TextEncoding(encoding))
    }

    pub fn name(&self) -> &'static str {
        self.0.name()
    }

    /// Encode `text`, failing rather than substituting characters the
    /// encoding cannot represent.
    pub fn encode(&self, text: &str) -> Result<Vec<u8>, ClipboardError> {
        let (bytes, _, had_errors) = self.0.encode(text);
        if had_errors {
            return Err(ClipboardError::UnrepresentableText {
                encoding: self.name(),
            });
        }
        Ok(bytes.into_owned())
    }

    /// Decode `bytes`, failing on malformed sequences.
    pub fn decode(&self, bytes: &[u8]) -> Result<String, ClipboardError> {
        self.0
            .decode_without_bom_handling_and_without_replacement(bytes)
            .map(|text| text.into_owned())
            .ok_or(ClipboardError::UndecodableText {
                encoding: self.name(),
            })
    }
}

impl Default for TextEncoding {
    fn default() -> Self {
        TextEncoding(encoding_rs::GBK)
    }
}

impl std::fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_gbk() {
        assert_eq!(TextEncoding::default().name(), "GBK");
        assert_eq!(
            TextEncoding::from_label(DEFAULT_ENCODING_LABEL).unwrap(),
            TextEncoding::default()
        );
    }

    #[test]
    fn test_from_label_is_case_insensitive() {
        assert_eq!(TextEncoding::from_label("UTF-8").unwrap().name(), "UTF-8");
        assert_eq!(
            TextEncoding::from_label("Shift_JIS").unwrap().name(),
            "Shift_JIS"
        );
    }

    #[test]
    fn test_from_label_unknown() {
        match TextEncoding::from_label("klingon") {
            Err(ClipboardError::UnknownEncoding { label }) => assert_eq!(label, "klingon"),
            other => panic!("Expected UnknownEncoding, got {:?}", other),
        }
    }

    #[test]
    fn test_from_label_rejects_decode_only_encodings() {
        match TextEncoding::from_label("utf-16le") {
            Err(ClipboardError::UnsupportedEncoding { label, encoding }) => {
                assert_eq!(label, "utf-16le");
                assert_eq!(encoding, "UTF-16LE");
            }
            other => panic!("Expected UnsupportedEncoding, got {:?}", other),
        }
        assert!(matches!(
            TextEncoding::from_label("UTF-16BE"),
            Err(ClipboardError::UnsupportedEncoding { .. })
        ));
        // iso-2022-kr resolves to the replacement encoding
        assert!(matches!(
            TextEncoding::from_label("iso-2022-kr"),
            Err(ClipboardError::UnsupportedEncoding {
                encoding: "replacement",
                ..
            })
        ));
    }

    #[test]
    fn test_every_accepted_encoding_round_trips_ascii() {
        let labels = [
            "gbk",
            "gb18030",
            "utf-8",
            "big5",
            "shift_jis",
            "euc-kr",
            "windows-1252",
        ];
        for label in labels {
            let encoding = TextEncoding::from_label(label).unwrap();
            let bytes = encoding.encode("hi").unwrap();
            assert_eq!(encoding.decode(&bytes).unwrap(), "hi", "label {}", label);
        }
    }

    #[test]
    fn test_gbk_round_trip() {
        let gbk = TextEncoding::default();
        let text = "你好，世界 hello 123";
        let bytes = gbk.encode(text).unwrap();
        assert_ne!(bytes, text.as_bytes());
        assert_eq!(gbk.decode(&bytes).unwrap(), text);
    }

    #[test]
    fn test_gbk_known_bytes() {
        let gbk = TextEncoding::default();
        assert_eq!(gbk.encode("中").unwrap(), vec![0xD6, 0xD0]);
        assert_eq!(gbk.decode(&[0xD6, 0xD0]).unwrap(), "中");
    }

    #[test]
    fn test_utf8_round_trip() {
        let utf8 = TextEncoding::from_label("utf-8").unwrap();
        let text = "naïve café 😀";
        assert_eq!(utf8.decode(&utf8.encode(text).unwrap()).unwrap(), text);
    }

    #[test]
    fn test_encode_unrepresentable() {
        let gbk = TextEncoding::default();
        assert!(matches!(
            gbk.encode("😀"),
            Err(ClipboardError::UnrepresentableText { encoding: "GBK" })
        ));
    }

    #[test]
    fn test_decode_malformed() {
        let gbk = TextEncoding::default();
        assert!(matches!(
            gbk.decode(&[0x81]),
            Err(ClipboardError::UndecodableText { .. })
        ));
    }

    #[test]
    fn test_empty_text() {
        let gbk = TextEncoding::default();
        assert!(gbk.encode("").unwrap().is_empty());
        assert_eq!(gbk.decode(&[]).unwrap(), "");
    }
}
