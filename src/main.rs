use luxe_market::infrastructure::config::load_config;
use luxe_market::utils::Formatter;
use luxe_market::{
    CatalogService, FilterOptions, LoginRequest, Logger, PaymentInfo, Session, ShippingInfo,
    SortOption,
};
use std::env;
use tracing::info;

#[tokio::main]
async fn main() -> luxe_market::Result<()> {
    let config = load_config()?;
    config.validate()?;
    Logger::init(&config.logging)?;

    let catalog = CatalogService::new()?;
    let mut session = Session::new(config, catalog);

    println!("🛍️  {} 演示会话", session.config().store.name);
    println!("=====================================\n");

    let args: Vec<String> = env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "browse" => browse_demo(&session),
            "cart" => cart_demo(&mut session)?,
            "checkout" => {
                cart_demo(&mut session)?;
                checkout_demo(&mut session).await?;
            }
            "all" => run_all(&mut session).await?,
            _ => {
                print_usage();
                return Ok(());
            }
        }
    } else {
        run_all(&mut session).await?;
    }

    println!("\n✅ 演示完成！");
    Ok(())
}

async fn run_all(session: &mut Session) -> luxe_market::Result<()> {
    browse_demo(session);
    cart_demo(session)?;
    checkout_demo(session).await
}

fn browse_demo(session: &Session) {
    let catalog = session.catalog();
    let symbol = &session.config().store.currency_symbol;

    println!("📂 分类: {}", catalog.categories().join(", "));

    for sort in SortOption::ALL {
        println!("\n🔎 全部商品 - {}", sort.label());
        for product in catalog.browse(&FilterOptions::default(), sort) {
            println!(
                "  #{} {:<40} {:>10}  {}",
                product.id,
                product.name,
                Formatter::format_price(symbol, product.price),
                Formatter::format_stars(&product.rating)
            );
        }
    }

    let filters = FilterOptions::default()
        .with_category("accessories")
        .with_price_range(None, Some(100.0));
    println!("\n🔎 配饰，价格 <= 100");
    for product in catalog.browse(&filters, SortOption::PriceLowHigh) {
        println!(
            "  #{} {} {}",
            product.id,
            product.name,
            Formatter::format_price(symbol, product.price)
        );
    }
}

fn cart_demo(session: &mut Session) -> luxe_market::Result<()> {
    session.add_to_cart_by_id(2, 1)?;
    session.add_to_cart_by_id(8, 2)?;
    session.add_to_cart_by_id(1, 1)?;
    session.cart_mut().update_quantity(1, 3);
    session.cart_mut().remove_from_cart(2);

    print_cart(session);
    Ok(())
}

async fn checkout_demo(session: &mut Session) -> luxe_market::Result<()> {
    if let Err(e) = session.begin_checkout() {
        println!("⚠️  {}", e);
    }

    let user = session
        .login(LoginRequest {
            email: "user@example.com".to_string(),
            password: "password".to_string(),
        })
        .await
        .clone();
    println!("👤 已登录: {} <{}>", user.name, user.email);

    session.begin_checkout()?;

    let summary = session.checkout().summary(session.cart());
    let symbol = session.config().store.currency_symbol.clone();
    println!("\n🧾 订单摘要");
    println!("  小计: {}", Formatter::format_price(&symbol, summary.subtotal));
    println!("  运费: {}", Formatter::format_price(&symbol, summary.shipping));
    println!(
        "  税费 ({}): {}",
        Formatter::format_rate(session.config().pricing.tax_rate),
        Formatter::format_price(&symbol, summary.tax)
    );
    println!("  合计: {}", Formatter::format_price(&symbol, summary.total));

    let shipping = ShippingInfo {
        full_name: user.name.clone(),
        address: "123 Market Street".to_string(),
        city: "San Francisco".to_string(),
        state: "CA".to_string(),
        zip_code: "94103".to_string(),
        phone: "415-555-0100".to_string(),
        ..session.checkout().blank_shipping()
    };
    session.submit_shipping(shipping)?;

    println!("\n💳 正在处理支付...");
    let order = session
        .place_order(PaymentInfo {
            card_number: "4242 4242 4242 4242".to_string(),
            card_name: user.name.clone(),
            expiry_date: "12/29".to_string(),
            cvv: "123".to_string(),
        })
        .await?
        .clone();

    info!(order_id = %order.id, "demo order placed");
    println!("🎉 订单号: {}", order.order_number);
    println!(
        "   共 {} 行，合计 {}",
        order.lines.len(),
        Formatter::format_price(&symbol, order.summary.total)
    );

    session.close_checkout();
    print_cart(session);
    Ok(())
}

fn print_cart(session: &Session) {
    let cart = session.cart();
    let symbol = &session.config().store.currency_symbol;

    println!("\n🛒 购物车 ({})", Formatter::format_item_count(cart.item_count()));
    if cart.is_empty() {
        println!("  (空)");
        return;
    }
    for line in cart.lines() {
        println!(
            "  {:<40} x{:<3} {:>10}",
            line.name,
            line.quantity,
            Formatter::format_price(symbol, line.subtotal())
        );
    }
    println!("  小计: {}", Formatter::format_price(symbol, cart.total()));
}

fn print_usage() {
    println!("用法: luxe-market [演示类型]");
    println!();
    println!("可用的演示类型:");
    println!("  browse    - 商品分类、筛选与排序");
    println!("  cart      - 购物车操作");
    println!("  checkout  - 登录并完成结账");
    println!("  all       - 运行所有演示（默认）");
}
