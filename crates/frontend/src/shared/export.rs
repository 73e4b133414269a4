//! CSV export with a browser download.
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

pub const CSV_SEPARATOR: char = ',';

/// Rows that can be written to a CSV file
pub trait CsvExportable {
    fn headers() -> Vec<&'static str>;

    fn to_csv_row(&self) -> Vec<String>;
}

/// Builds the CSV text: a header line, then one line per row.
pub fn build_csv<T: CsvExportable>(data: &[T]) -> String {
    let separator = CSV_SEPARATOR.to_string();
    let mut lines = Vec::with_capacity(data.len() + 1);
    lines.push(T::headers().join(&separator));
    for item in data {
        let cells: Vec<String> = item.to_csv_row().iter().map(|c| escape_csv_cell(c)).collect();
        lines.push(cells.join(&separator));
    }
    lines.join("\n")
}

/// Exports the rows and starts the download. An empty list still yields the header line.
pub fn export_to_csv<T: CsvExportable>(data: &[T], filename: &str) -> Result<(), String> {
    let blob = create_csv_blob(&build_csv(data))?;
    download_blob(&blob, filename)
}

/// Quotes a cell holding the separator, a quote or a line break.
pub fn escape_csv_cell(cell: &str) -> String {
    if cell.contains(CSV_SEPARATOR) || cell.contains('"') || cell.contains('\n') || cell.contains('\r') {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

fn create_csv_blob(content: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type("text/csv;charset=utf-8;");

    Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    let body = document.body().ok_or("No body element")?;
    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row(&'static str, &'static str);

    impl CsvExportable for Row {
        fn headers() -> Vec<&'static str> {
            vec!["Name", "Note"]
        }

        fn to_csv_row(&self) -> Vec<String> {
            vec![self.0.to_string(), self.1.to_string()]
        }
    }

    #[test]
    fn test_escape_csv_cell() {
        assert_eq!(escape_csv_cell("plain"), "plain");
        assert_eq!(escape_csv_cell("a,b"), "\"a,b\"");
        assert_eq!(escape_csv_cell("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_csv_cell("two\nlines"), "\"two\nlines\"");
    }

    #[test]
    fn test_build_csv() {
        let csv = build_csv(&[Row("Ravi", "ok"), Row("Park Street, Kolkata", "")]);
        assert_eq!(csv, "Name,Note\nRavi,ok\n\"Park Street, Kolkata\",");
    }

    #[test]
    fn test_build_csv_header_only() {
        let rows: [Row; 0] = [];
        assert_eq!(build_csv(&rows), "Name,Note");
    }
}
