use crate::domain::model::ContactResult;
use crate::utils::error::{FinderError, Result};
use csv::{QuoteStyle, Terminator, WriterBuilder};

pub const CSV_HEADER: &str = "Name,Role,Company,Email,Confidence,Source";

/// Render contacts as CSV: plain header row, every data field quoted.
pub fn to_csv(contacts: &[ContactResult]) -> Result<String> {
    let mut buffer = format!("{}\n", CSV_HEADER).into_bytes();
    {
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .quote_style(QuoteStyle::Always)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(&mut buffer);

        for contact in contacts {
            writer.write_record([
                contact.name.as_str(),
                contact.role.as_str(),
                contact.company.as_str(),
                contact.email.as_str(),
                contact.confidence.as_str(),
                contact.source.as_str(),
            ])?;
        }
        writer.flush()?;
    }

    String::from_utf8(buffer).map_err(|e| FinderError::ProcessingError {
        message: format!("CSV output is not valid UTF-8: {}", e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Confidence;

    #[test]
    fn test_empty_export_is_header_only() {
        assert_eq!(to_csv(&[]).unwrap(), "Name,Role,Company,Email,Confidence,Source\n");
    }

    #[test]
    fn test_fields_are_quoted_and_escaped() {
        let contacts = vec![ContactResult {
            name: "Jordan Lee".to_string(),
            role: "Founder & CEO".to_string(),
            company: "Acme, \"The\" Company".to_string(),
            email: "jordan.lee@acme.io".to_string(),
            confidence: Confidence::High,
            source: "https://www.linkedin.com/in/jordan-lee | https://acme.io".to_string(),
        }];

        let csv = to_csv(&contacts).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[1],
            "\"Jordan Lee\",\"Founder & CEO\",\"Acme, \"\"The\"\" Company\",\"jordan.lee@acme.io\",\"high\",\"https://www.linkedin.com/in/jordan-lee | https://acme.io\""
        );

        let mut reader = csv::Reader::from_reader(csv.as_bytes());
        let record = reader.records().next().unwrap().unwrap();
        assert_eq!(&record[2], "Acme, \"The\" Company");
    }
}
