/// Fetch category goods from the JD Union router.
///
/// ```bash
/// cargo run --example category_goods -- <app_key> <app_secret>
/// ```
use std::env;

use anyhow::Result;
use jd_union_rs::JdClient;

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        eprintln!("Usage: {} <app_key> <app_secret>", args[0]);
        std::process::exit(1);
    }

    let client = JdClient::new(&args[1], &args[2]);

    let response = client
        .request(
            "jd.union.open.category.goods.get",
            &serde_json::json!({"goodsReqDTO": {"keyword": "鞋", "pageIndex": 1}}),
        )
        .await?;

    println!("Status: {}", response.status());
    println!("{}", response.text().await?);

    Ok(())
}
