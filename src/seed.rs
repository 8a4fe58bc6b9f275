use chrono::Utc;
use rand::Rng;
use uuid::Uuid;

use crate::models::Producto;

// Commerce-style word lists for synthetic product names.
const ADJECTIVES: &[&str] = &[
    "Small", "Ergonomic", "Rustic", "Intelligent", "Gorgeous", "Incredible", "Fantastic",
    "Practical", "Sleek", "Awesome", "Generic", "Handcrafted", "Handmade", "Licensed",
    "Refined", "Unbranded", "Tasty", "Modern", "Recycled", "Luxurious", "Elegant",
];

const MATERIALS: &[&str] = &[
    "Steel", "Wooden", "Concrete", "Plastic", "Cotton", "Granite", "Rubber", "Metal",
    "Soft", "Fresh", "Frozen", "Bronze", "Bamboo", "Aluminum", "Ceramic", "Marble",
];

const NOUNS: &[&str] = &[
    "Chair", "Car", "Computer", "Keyboard", "Mouse", "Bike", "Ball", "Gloves", "Pants",
    "Shirt", "Table", "Shoes", "Hat", "Towels", "Soap", "Tuna", "Chicken", "Fish",
    "Cheese", "Bacon", "Pizza", "Salad", "Sausages", "Chips",
];

const SKU_PREFIX: &str = "SKU";
const SKU_SUFFIX_LEN: usize = 6;
const SKU_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

const PRECIO_MIN: i32 = 1000;
const PRECIO_MAX: i32 = 100_000;
const STOCK_MAX: i32 = 100;

const NOMBRE_MAX_CHARS: usize = 50;

/// Synthesizes `missing` active products with randomized names, prices and
/// stock. Each SKU carries the batch timestamp plus the item's offset, so a
/// batch can never collide with itself.
pub fn synthesize_productos(missing: i64) -> Vec<Producto> {
    let mut rng = rand::thread_rng();
    let base_millis = Utc::now().timestamp_millis();

    (0..missing)
        .map(|i| Producto {
            id: Uuid::new_v4(),
            nombre: random_nombre(&mut rng),
            sku: random_sku(&mut rng, base_millis + i),
            precio: rng.gen_range(PRECIO_MIN..=PRECIO_MAX),
            stock: rng.gen_range(0..=STOCK_MAX),
            activo: true,
        })
        .collect()
}

fn random_nombre(rng: &mut impl Rng) -> String {
    let nombre = format!(
        "{} {} {}",
        ADJECTIVES[rng.gen_range(0..ADJECTIVES.len())],
        MATERIALS[rng.gen_range(0..MATERIALS.len())],
        NOUNS[rng.gen_range(0..NOUNS.len())],
    );
    nombre.chars().take(NOMBRE_MAX_CHARS).collect()
}

fn random_sku(rng: &mut impl Rng, uniquifier: i64) -> String {
    let suffix: String = (0..SKU_SUFFIX_LEN)
        .map(|_| SKU_CHARSET[rng.gen_range(0..SKU_CHARSET.len())] as char)
        .collect();
    format!("{}-{}-{}", SKU_PREFIX, suffix, uniquifier)
}
