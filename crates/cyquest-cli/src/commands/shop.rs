use anyhow::Result;
use chrono::Utc;

use cyquest_application::{AppContext, ShopServiceError};

use super::gate_student;

pub async fn list(ctx: &AppContext) -> Result<()> {
    if gate_student(ctx).await?.is_none() {
        return Ok(());
    }

    let status = ctx.shop.status().await;
    println!("🛒 Shop catalog ({} coins)", status.coins);
    for item in ctx.shop.catalog().items() {
        let owned = status.owned.iter().any(|id| id == &item.id);
        let equipped = status.equipped.iter().any(|id| id == &item.id);
        let marker = if equipped {
            "[equipped]"
        } else if owned {
            "[owned]"
        } else {
            ""
        };
        println!(
            "  {:<20} {:>6} coins  {:<8} {} {}",
            item.id, item.price, item.category, item.name, marker
        );
        println!("      {}", item.description);
    }
    Ok(())
}

pub async fn status(ctx: &AppContext) -> Result<()> {
    if gate_student(ctx).await?.is_none() {
        return Ok(());
    }

    let now = Utc::now();
    let status = ctx.shop.status_at(now).await;
    println!("💰 Balance: {} coins", status.coins);
    println!("🎒 Owned: {}", status.owned.join(", "));
    println!("🎨 Equipped: {}", status.equipped.join(", "));
    match status.booster {
        Some(booster) => println!(
            "⚡ Booster: x{:.2}, {} min remaining",
            booster.multiplier,
            booster.remaining_at(now).num_minutes()
        ),
        None => println!("⚡ Booster: none"),
    }
    Ok(())
}

pub async fn buy(ctx: &AppContext, item_id: &str) -> Result<()> {
    if gate_student(ctx).await?.is_none() {
        return Ok(());
    }

    match ctx.shop.purchase(item_id).await {
        Ok(()) => {
            let status = ctx.shop.status().await;
            println!("✅ Bought {} ({} coins left)", item_id, status.coins);
        }
        Err(ShopServiceError::Rejected(rejection)) => println!("❌ {}", rejection),
        Err(ShopServiceError::Storage(e)) => return Err(e.into()),
    }
    Ok(())
}

pub async fn equip(ctx: &AppContext, item_id: &str) -> Result<()> {
    if gate_student(ctx).await?.is_none() {
        return Ok(());
    }

    match ctx.shop.equip(item_id).await {
        Ok(()) => println!("✅ Equipped {}", item_id),
        Err(ShopServiceError::Rejected(rejection)) => println!("❌ {}", rejection),
        Err(ShopServiceError::Storage(e)) => return Err(e.into()),
    }
    Ok(())
}

pub async fn reset(ctx: &AppContext) -> Result<()> {
    if gate_student(ctx).await?.is_none() {
        return Ok(());
    }

    match ctx.shop.reset_to_defaults().await {
        Ok(()) => println!("✅ Loadout reset to defaults"),
        Err(ShopServiceError::Rejected(rejection)) => println!("❌ {}", rejection),
        Err(ShopServiceError::Storage(e)) => return Err(e.into()),
    }
    Ok(())
}
