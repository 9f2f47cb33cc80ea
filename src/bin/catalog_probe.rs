//! 商品目录探测工具
//! 直接调用目录客户端并把结果以 JSON 打印到标准输出

use anyhow::Context;
use product_showcase::app::catalog::{CatalogClient, ProductPath};
use product_showcase::config;
use product_showcase::infrastructure::logger::Logger;
use std::env;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();
    let Some(mode) = args.get(1) else {
        print_usage();
        return Ok(());
    };

    let config_path = config::locate_config_file(None);
    let config = config::load_config(config_path.as_deref())?;
    let _guard = Logger::init(&config.logging)?;

    let client = CatalogClient::new(&config.catalog).context("无法创建上游 HTTP 客户端")?;

    let output = match mode.as_str() {
        "ids" => {
            let paths: Vec<ProductPath> = client
                .list_all_product_ids()
                .await
                .into_iter()
                .map(|id| ProductPath { id })
                .collect();
            serde_json::to_string_pretty(&paths)?
        }
        "all" => serde_json::to_string_pretty(&client.fetch_all_products().await)?,
        id => serde_json::to_string_pretty(&client.fetch_product_by_id(id).await)?,
    };

    println!("{}", output);
    Ok(())
}

fn print_usage() {
    println!("用法: catalog_probe <ids|all|商品ID>");
    println!();
    println!("  ids   - 列出全部商品 ID（失败时为空数组）");
    println!("  all   - 获取全部商品");
    println!("  <id>  - 获取单个商品");
}
