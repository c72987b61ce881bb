use quill_core::{from, QueryBuilder, RenderStyle, SortDirection};
use tracing_subscriber::EnvFilter;

fn main() -> quill_core::Result<()> {
    // RUST_LOG=quill=trace shows every builder call
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let user_query = from("users")?
        .select(("id", "email", "name"))
        .where_("age > 18")
        .order_by("name", "ASC")
        .limit(10);

    println!("\nUser query:\n{}", user_query.to_sql());

    // Empty selection falls back to SELECT *
    let bank_query = from("bank")?
        .select(())
        .where_("name = samuel")
        .where_("lastname = calderon")
        .order_by("name", "ASC")
        .limit(1);

    println!("\nBank query:\n{}", bank_query.to_sql());

    // Unset clauses in both layouts
    let bare = from("accounts")?;
    println!("\nVerbatim: {:?}", bare.to_sql());
    println!("Compact:  {:?}", bare.style(RenderStyle::Compact).to_sql());

    // Strict direction parsing rejects unknown tokens
    let direction: SortDirection = "desc".parse()?;
    let recent = from("transactions")?
        .select(vec!["id", "amount"])
        .order_by("created_at", direction)
        .limit(5);
    println!("\nRecent transactions:\n{}", recent);

    if let Err(err) = "sideways".parse::<SortDirection>() {
        println!("\nRejected direction: {}", err);
    }

    Ok(())
}
