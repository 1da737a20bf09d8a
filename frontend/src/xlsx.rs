//! Spreadsheet generation for the dashboard export.
//!
//! Rows carry their own label sets (flight-detail columns exist only on
//! booked rows), so the header is the union of all labels in first-seen
//! order and each value lands under its own label's column.

use rust_xlsxwriter::{Format, Workbook, XlsxError};

use common::export::ExportRow;

pub const XLSX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Builds an `.xlsx` workbook with one sheet holding `rows` and returns
/// its bytes.
pub fn build_workbook(rows: &[ExportRow], sheet_name: &str) -> Result<Vec<u8>, XlsxError> {
    let headers = header_union(rows);

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(sheet_name)?;

    let bold = Format::new().set_bold();
    for (col, label) in headers.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *label, &bold)?;
    }

    for (index, row) in rows.iter().enumerate() {
        for (label, value) in row.iter() {
            if let Some(col) = headers.iter().position(|h| *h == label) {
                sheet.write_string((index + 1) as u32, col as u16, value)?;
            }
        }
    }

    workbook.save_to_buffer()
}

fn header_union(rows: &[ExportRow]) -> Vec<&'static str> {
    let mut headers = Vec::new();
    for row in rows {
        for label in row.labels() {
            if !headers.contains(&label) {
                headers.push(label);
            }
        }
    }
    headers
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::export::transform;
    use common::model::flight::{FlightSchedule, TravelClass};
    use common::model::record::SubmissionRecord;

    fn record(booking: &str) -> SubmissionRecord {
        SubmissionRecord {
            full_name: Some("Asha Rao".to_string()),
            flight_booking: Some(booking.to_string()),
            departure_city: Some("Mumbai".to_string()),
            arrival_city: Some("Delhi".to_string()),
            ..SubmissionRecord::default()
        }
    }

    #[test]
    fn header_union_preserves_first_seen_order() {
        let schedule = FlightSchedule::default();
        let rows = transform(
            &[record("No"), record("Yes")],
            TravelClass::Economy,
            &schedule,
        );

        let headers = header_union(&rows);
        assert_eq!(headers[0], "Sr No");
        // The booked row contributes the detail columns the first row lacks.
        assert!(headers.contains(&"Departure Flight - Option"));
        let base = headers.iter().position(|h| *h == "Full Name");
        let extra = headers.iter().position(|h| *h == "Departure Flight - Option");
        assert!(base < extra);
    }

    #[test]
    fn workbook_bytes_are_produced() {
        let schedule = FlightSchedule::default();
        let rows = transform(&[record("No")], TravelClass::Economy, &schedule);

        let bytes = build_workbook(&rows, "Registration").unwrap();
        // An xlsx file is a zip archive; check the magic bytes.
        assert_eq!(&bytes[..2], b"PK");
    }
}
