use crate::shared::export::CsvExportable;
use contracts::domain::a003_payment::Transaction;
use contracts::shared::list_query::Coded;

impl CsvExportable for Transaction {
    fn headers() -> Vec<&'static str> {
        vec![
            "Transaction ID",
            "Customer Name",
            "Amount",
            "Date",
            "Status",
            "Mode",
            "Booking ID",
        ]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.transaction_id.clone(),
            self.customer_name.clone(),
            self.amount.value().to_string(),
            self.date_display(),
            self.status.code().to_string(),
            self.mode.code().to_string(),
            self.booking_id.to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use crate::shared::export::build_csv;
    use contracts::domain::a003_payment::sample_transactions;

    #[test]
    fn csv_has_header_and_one_line_per_row() {
        let rows = sample_transactions();
        let csv = build_csv(&rows[..2]);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "Transaction ID,Customer Name,Amount,Date,Status,Mode,Booking ID"
        );
        assert_eq!(
            lines[1],
            "pay_MvNRzHvOjQT8Ab,Rajesh Kumar,8500,2024-01-25 14:30,success,upi,BK001"
        );
    }

    #[test]
    fn customer_names_with_commas_are_quoted() {
        let mut rows = sample_transactions();
        rows.truncate(1);
        rows[0].customer_name = "Kumar, Rajesh".into();
        let csv = build_csv(&rows);
        assert!(csv.lines().nth(1).is_some_and(|l| l.contains("\"Kumar, Rajesh\"")));
    }

    #[test]
    fn empty_history_exports_header_only() {
        let csv = build_csv::<contracts::domain::a003_payment::Transaction>(&[]);
        assert_eq!(
            csv,
            "Transaction ID,Customer Name,Amount,Date,Status,Mode,Booking ID"
        );
    }
}
