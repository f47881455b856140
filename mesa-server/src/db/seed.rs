//! First-start seed data
//!
//! Each collection is seeded only while it is empty.

use sqlx::SqlitePool;

const IMAGE_PARAMS: &str = "?w=500&auto=format&fit=crop&q=60";

/// (id, name, category, price, description, unsplash photo id)
const MENU: [(&str, &str, &str, f64, &str, &str); 4] = [
    (
        "1",
        "Hambúrguer Clássico",
        "Pratos Principais",
        25.00,
        "Pão brioche, blend de carne 180g, queijo cheddar e salada.",
        "photo-1568901346375-23c9450c58cd",
    ),
    (
        "2",
        "Batata Frita Rústica",
        "Entradas",
        18.00,
        "Batatas cortadas à mão com alecrim e alho.",
        "photo-1573080496987-a199f8cd4058",
    ),
    (
        "3",
        "Refrigerante Artesanal",
        "Bebidas",
        8.00,
        "Cola ou Guaraná feito na casa.",
        "photo-1622483767028-3f66f32aef97",
    ),
    (
        "4",
        "Pudim de Leite",
        "Sobremesas",
        12.00,
        "Receita tradicional da avó.",
        "photo-1593062096033-9a26b09da705",
    ),
];

/// (id, name, seats)
const TABLES: [(&str, &str, i64); 4] = [
    ("1", "Mesa 1", 4),
    ("2", "Mesa 2", 2),
    ("3", "Mesa 3", 6),
    ("4", "Mesa 4", 4),
];

/// Seed the menu and dining tables when they are empty
pub async fn seed_if_empty(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let menu_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM menu_items")
        .fetch_one(pool)
        .await?;
    if menu_count == 0 {
        for (id, name, category, price, description, photo) in MENU {
            sqlx::query(
                "INSERT INTO menu_items (id, name, category, price, description, image) VALUES (?, ?, ?, ?, ?, ?)",
            )
            .bind(id)
            .bind(name)
            .bind(category)
            .bind(price)
            .bind(description)
            .bind(format!("https://images.unsplash.com/{photo}{IMAGE_PARAMS}"))
            .execute(pool)
            .await?;
        }
        tracing::info!(count = MENU.len(), "Seeded menu items");
    }

    let table_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tables")
        .fetch_one(pool)
        .await?;
    if table_count == 0 {
        for (id, name, seats) in TABLES {
            sqlx::query("INSERT INTO tables (id, name, seats) VALUES (?, ?, ?)")
                .bind(id)
                .bind(name)
                .bind(seats)
                .execute(pool)
                .await?;
        }
        tracing::info!(count = TABLES.len(), "Seeded dining tables");
    }

    Ok(())
}
