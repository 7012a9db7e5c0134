//! 启动时载入的示例商品

use super::model::Product;

struct SeedProduct {
    id: &'static str,
    title: &'static str,
    category: &'static str,
    description: &'static str,
    price: f64,
    stock: u64,
    rating: f64,
    image: &'static str,
}

const SEED: [SeedProduct; 10] = [
    SeedProduct {
        id: "p1",
        title: "Jubilee Cookies",
        category: "Sweets",
        description: "Classic crunchy vanilla cookies. Perfect with tea.",
        price: 79.0,
        stock: 20,
        rating: 4.6,
        image: "Cookie",
    },
    SeedProduct {
        id: "p2",
        title: "Village House Milk",
        category: "Drinks",
        description: "UHT milk, 2.5% fat. 1 litre.",
        price: 99.0,
        stock: 15,
        rating: 4.3,
        image: "Milk",
    },
    SeedProduct {
        id: "p3",
        title: "Borodinsky Bread",
        category: "Bakery",
        description: "Rye bread with coriander. 400 g.",
        price: 59.0,
        stock: 30,
        rating: 4.1,
        image: "Bread",
    },
    SeedProduct {
        id: "p4",
        title: "Granny Smith Apples",
        category: "Fruit",
        description: "Green sweet and sour apples. 1 kg.",
        price: 129.0,
        stock: 25,
        rating: 4.8,
        image: "Apple",
    },
    SeedProduct {
        id: "p5",
        title: "Alenka Chocolate",
        category: "Sweets",
        description: "Milk chocolate with nuts. 90 g.",
        price: 89.0,
        stock: 50,
        rating: 4.9,
        image: "Chocolate",
    },
    SeedProduct {
        id: "p6",
        title: "Doktorskaya Sausage",
        category: "Meat",
        description: "Premium boiled sausage. 500 g.",
        price: 249.0,
        stock: 12,
        rating: 4.4,
        image: "Sausage",
    },
    SeedProduct {
        id: "p7",
        title: "Dobry Orange Juice",
        category: "Drinks",
        description: "Reconstituted orange juice. 1 litre.",
        price: 119.0,
        stock: 18,
        rating: 4.2,
        image: "Juice",
    },
    SeedProduct {
        id: "p8",
        title: "Barilla Spaghetti",
        category: "Grocery",
        description: "Durum wheat spaghetti. 500 g.",
        price: 139.0,
        stock: 22,
        rating: 4.7,
        image: "Pasta",
    },
    SeedProduct {
        id: "p9",
        title: "Activia Yogurt",
        category: "Dairy",
        description: "Drinking yogurt with strawberry. 260 g.",
        price: 69.0,
        stock: 35,
        rating: 4.5,
        image: "Yogurt",
    },
    SeedProduct {
        id: "p10",
        title: "Lavazza Coffee",
        category: "Drinks",
        description: "Ground coffee. 250 g.",
        price: 399.0,
        stock: 8,
        rating: 4.9,
        image: "Coffee",
    },
];

pub fn seed_products() -> Vec<Product> {
    SEED.iter()
        .map(|s| Product {
            id: s.id.to_string(),
            title: s.title.to_string(),
            category: s.category.to_string(),
            description: s.description.to_string(),
            price: s.price,
            stock: s.stock,
            rating: s.rating,
            image_url: format!("https://via.placeholder.com/150?text={}", s.image),
        })
        .collect()
}
