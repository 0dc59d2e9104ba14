//! Static seed catalog.
//!
//! The dummy data the storefront renders when no backend is configured.

use shop_commerce::prelude::*;

fn usd(cents: i64) -> Money {
    Money::new(cents, Currency::USD)
}

/// The full seed catalog.
pub fn catalog() -> Catalog {
    Catalog::new(products(), categories())
}

/// The seed product collection.
pub fn products() -> Vec<Product> {
    vec![
        Product::new("1", "Premium Wireless Headphones", usd(29999), "Electronics", "electronics")
            .with_description(
                "Experience crystal-clear sound with our premium wireless headphones. \
                 Featuring active noise cancellation, 30-hour battery life, and \
                 ultra-comfortable ear cushions.",
            )
            .with_discount(15)
            .with_image("https://images.unsplash.com/photo-1505740420928-5e560c06d30e?q=80&w=1000")
            .featured()
            .new_arrival()
            .with_rating(4.8, 156)
            .with_stock(23),
        Product::new("2", "Smart Fitness Watch", usd(19999), "Electronics", "electronics")
            .with_description(
                "Track your fitness goals with our advanced smart watch. Features include \
                 heart rate monitoring, sleep tracking, GPS, and water resistance up to 50 \
                 meters.",
            )
            .with_image("https://images.unsplash.com/photo-1523275335684-37898b6baf30?q=80&w=1000")
            .featured()
            .with_rating(4.6, 89)
            .with_stock(15),
        Product::new("3", "Casual Cotton T-Shirt", usd(2999), "Clothing", "clothing")
            .with_description(
                "Stay comfortable and stylish with our premium cotton t-shirt. Made from \
                 100% organic cotton, it's soft, breathable, and perfect for everyday wear.",
            )
            .with_discount(10)
            .with_image("https://images.unsplash.com/photo-1521572163474-6864f9cf17ab?q=80&w=1000")
            .with_rating(4.5, 210)
            .with_stock(100),
        Product::new("4", "Designer Leather Wallet", usd(5999), "Accessories", "accessories")
            .with_description(
                "Elegant and functional leather wallet with multiple card slots, bill \
                 compartments, and RFID protection. Made from genuine leather that ages \
                 beautifully.",
            )
            .with_image("https://images.unsplash.com/photo-1627123424574-724758594e93?q=80&w=1000")
            .featured()
            .with_rating(4.7, 67)
            .with_stock(30),
        Product::new("5", "Slim Fit Denim Jeans", usd(7999), "Clothing", "clothing")
            .with_description(
                "Classic slim fit jeans that combine style and comfort. Made from \
                 high-quality denim with just the right amount of stretch for all-day \
                 comfort.",
            )
            .with_discount(20)
            .with_image("https://images.unsplash.com/photo-1542272604-787c3835535d?q=80&w=1000")
            .with_rating(4.4, 132)
            .with_stock(45),
        Product::new("6", "Portable Bluetooth Speaker", usd(8999), "Electronics", "electronics")
            .with_description(
                "Take your music anywhere with this compact yet powerful Bluetooth speaker. \
                 Features 12-hour battery life, waterproof design, and impressive bass \
                 response.",
            )
            .with_image("https://images.unsplash.com/photo-1608043152269-423dbba4e7e1?q=80&w=1000")
            .new_arrival()
            .with_rating(4.3, 78)
            .with_stock(18),
        Product::new("7", "Polarized Sunglasses", usd(12999), "Accessories", "accessories")
            .with_description(
                "Protect your eyes in style with our polarized sunglasses. Featuring UV400 \
                 protection, lightweight frame, and classic design that suits any face \
                 shape.",
            )
            .with_discount(15)
            .with_image("https://images.unsplash.com/photo-1572635196237-14b3f281503f?q=80&w=1000")
            .with_rating(4.6, 94)
            .with_stock(27),
        Product::new("8", "Cozy Knit Sweater", usd(6999), "Clothing", "clothing")
            .with_description(
                "Stay warm and fashionable with our soft knit sweater. Perfect for \
                 layering, this versatile piece features a relaxed fit and premium yarn \
                 for lasting comfort.",
            )
            .with_image("https://images.unsplash.com/photo-1434389677669-e08b4cac3105?q=80&w=1000")
            .featured()
            .with_rating(4.5, 116)
            .with_stock(32),
    ]
}

/// The seed category collection.
pub fn categories() -> Vec<Category> {
    vec![
        Category::new(
            "clothing",
            "Clothing",
            "Discover our collection of stylish and comfortable clothing for all occasions.",
            "https://images.unsplash.com/photo-1489987707025-afc232f7ea0f?q=80&w=1000",
            42,
        ),
        Category::new(
            "electronics",
            "Electronics",
            "Explore the latest gadgets and electronics to enhance your digital lifestyle.",
            "https://images.unsplash.com/photo-1550009158-9ebf69173e03?q=80&w=1000",
            38,
        ),
        Category::new(
            "accessories",
            "Accessories",
            "Complete your look with our range of fashionable accessories and jewelry.",
            "https://images.unsplash.com/photo-1511556820780-d912e42b4980?q=80&w=1000",
            27,
        ),
        Category::new(
            "home",
            "Home & Living",
            "Transform your space with our curated selection of home decor and essentials.",
            "https://images.unsplash.com/photo-1583847268964-b28dc8f51f92?q=80&w=1000",
            31,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_shape() {
        let catalog = catalog();
        assert_eq!(catalog.products.len(), 8);
        assert_eq!(catalog.categories.len(), 4);
    }

    #[test]
    fn test_seed_flags() {
        let catalog = catalog();
        assert_eq!(catalog.featured_products().len(), 4);
        assert_eq!(catalog.new_products().len(), 2);
    }

    #[test]
    fn test_seed_effective_prices_fit_default_range() {
        // Every seed product falls inside the default listing price range,
        // so the unfiltered listing shows the whole catalog.
        let query = CatalogQuery::new();
        assert_eq!(query.apply(&products()).len(), 8);
    }

    #[test]
    fn test_seed_ids_unique() {
        let products = products();
        for (i, a) in products.iter().enumerate() {
            for b in &products[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }
}
