use contas_api::{Client, ContasApiError, DEFAULT_BASE_URL, Request, endpoints::FilterCriteria};

#[tokio::main]
pub async fn main() -> Result<(), ContasApiError> {
    let client = Client::new(DEFAULT_BASE_URL);

    let filter = FilterCriteria::new().start("2024-01-01").end("2024-01-31");
    let summary = client.send(Request::reports().summary(filter)).await?;

    println!(
        "gastos {} / despesas {} / saldo {}",
        summary.total_purchases, summary.total_bills, summary.balance
    );
    Ok(())
}
