use crate::common::event::{Action, TellerRequest};
use std::io::Read;

#[derive(serde::Deserialize)]
/// Internal CSV row matching the script headers. Every column but `action`
/// may be blank or missing; the worker decides what is required.
struct CsvRow {
    action: String,
    #[serde(default)]
    account: Option<String>,
    #[serde(default)]
    holder: Option<String>,
    #[serde(default)]
    amount: Option<String>,
}

/// Reads teller requests, one per CSV row.
///
/// Supported headers: `action,account,holder,amount`. Text fields are trimmed
/// and blanks become empty strings. Only rows the CSV layer cannot decode or
/// whose action is unknown are errors; form validation happens later.
///
/// # Examples
///
/// ```
/// use bank_ledger::io::reader::read_requests;
/// use bank_ledger::common::event::Action;
/// use csv::ReaderBuilder;
///
/// let data = "action,account,holder,amount\n\
/// create,A1,Alice,\n\
/// deposit,A1,,100\n";
/// let mut rdr = ReaderBuilder::new().from_reader(data.as_bytes());
/// let requests: Vec<_> = read_requests(&mut rdr).collect::<Result<_, _>>().unwrap();
///
/// assert_eq!(requests[0].action, Action::Create);
/// assert_eq!(requests[1].amount, "100");
/// ```
pub fn read_requests<R: Read>(
    rdr: &mut csv::Reader<R>,
) -> impl Iterator<Item = Result<TellerRequest, String>> + '_ {
    rdr.deserialize::<CsvRow>().enumerate().map(|(idx, res)| {
        // Header is line 1.
        let line = idx + 2;
        let row = res.map_err(|e| format!("line {line}: {e}"))?;
        let action = Action::parse(&row.action)
            .ok_or_else(|| format!("line {line}: unknown action: {}", row.action.trim()))?;

        Ok(TellerRequest {
            action,
            account: field(row.account),
            holder: field(row.holder),
            amount: field(row.amount),
        })
    })
}

fn field(value: Option<String>) -> String {
    value.map(|v| v.trim().to_owned()).unwrap_or_default()
}
