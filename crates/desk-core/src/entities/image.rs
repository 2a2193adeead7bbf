use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// An image embedded in an article as a self-contained data URL.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ArticleImage {
    /// Original file name.
    pub name: String,
    /// Size of the original file in bytes.
    #[serde(alias = "size")]
    pub size_bytes: u64,
    /// `data:{mime};base64,{payload}`.
    pub data_url: String,
}

impl ArticleImage {
    /// Human-readable size: `"{n} b"` below one kilobyte, else `"{n:.2} kb"`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn size_label(&self) -> String {
        if self.size_bytes < 1024 {
            format!("{} b", self.size_bytes)
        } else {
            format!("{:.2} kb", self.size_bytes as f64 / 1024.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn image(size_bytes: u64) -> ArticleImage {
        ArticleImage {
            name: "photo.png".into(),
            size_bytes,
            data_url: "data:image/png;base64,".into(),
        }
    }

    #[rstest]
    #[case(0, "0 b")]
    #[case(1023, "1023 b")]
    #[case(1024, "1.00 kb")]
    #[case(1536, "1.50 kb")]
    #[case(2_000_000, "1953.12 kb")]
    fn size_labels(#[case] size: u64, #[case] expected: &str) {
        assert_eq!(image(size).size_label(), expected);
    }

    #[test]
    fn reads_legacy_size_key() {
        let json = r#"{"name":"a.jpg","size":12,"dataUrl":"data:image/jpeg;base64,AAAA"}"#;
        let img: ArticleImage = serde_json::from_str(json).unwrap();
        assert_eq!(img.size_bytes, 12);
    }
}
