// File: attire-core/src/catalog.rs
//
// Hand-authored seed data standing in for a real product database. The
// catalog is read-only; the store clones it at startup.

use chrono::{TimeZone, Utc};
use uuid::Uuid;

use attire_common::models::{
    ClothingCategory, ClothingItem, FashionPost, Region, Size, User,
};

fn size(id: &str, region: &str, value: &str, us_equivalent: &str) -> Size {
    Size {
        id: id.to_string(),
        region: region.to_string(),
        value: value.to_string(),
        us_equivalent: us_equivalent.to_string(),
    }
}

/// The fixed clothing catalog every session starts from.
pub fn seed_catalog() -> Vec<ClothingItem> {
    vec![
        ClothingItem {
            id: "1".to_string(),
            name: "Traditional Silk Saree".to_string(),
            description: "Elegant Kanjivaram silk saree with intricate gold border design, \
                          perfect for special occasions."
                .to_string(),
            category: ClothingCategory::Saree,
            origin: Region::SouthAsia,
            image_url: "https://images.pexels.com/photos/2531734/pexels-photo-2531734.jpeg"
                .to_string(),
            model_image_url: Some(
                "https://images.pexels.com/photos/2531734/pexels-photo-2531734.jpeg".to_string(),
            ),
            price: 149.99,
            affiliate_link: "https://example.com/saree1".to_string(),
            sizes: vec![size("s1", "India", "Free Size", "S-M-L")],
            colors: vec!["Red".to_string(), "Gold".to_string()],
        },
        ClothingItem {
            id: "2".to_string(),
            name: "Premium Agbada Set".to_string(),
            description: "Three-piece Agbada set with embroidered design, made from \
                          high-quality cotton blend."
                .to_string(),
            category: ClothingCategory::Agbada,
            origin: Region::WestAfrica,
            image_url: "https://images.pexels.com/photos/13727829/pexels-photo-13727829.jpeg"
                .to_string(),
            model_image_url: Some(
                "https://images.pexels.com/photos/13727829/pexels-photo-13727829.jpeg".to_string(),
            ),
            price: 189.99,
            affiliate_link: "https://example.com/agbada1".to_string(),
            sizes: vec![
                size("a1", "Nigeria", "L", "M"),
                size("a2", "Nigeria", "XL", "L"),
                size("a3", "Nigeria", "XXL", "XL"),
            ],
            colors: vec!["White".to_string(), "Blue".to_string(), "Gold".to_string()],
        },
        ClothingItem {
            id: "3".to_string(),
            name: "Traditional Hanfu Dress".to_string(),
            description: "Authentic Hanfu with flowing sleeves and traditional embroidery \
                          patterns."
                .to_string(),
            category: ClothingCategory::Hanfu,
            origin: Region::EastAsia,
            image_url: "https://images.pexels.com/photos/5906775/pexels-photo-5906775.jpeg"
                .to_string(),
            model_image_url: Some(
                "https://images.pexels.com/photos/5906775/pexels-photo-5906775.jpeg".to_string(),
            ),
            price: 129.99,
            affiliate_link: "https://example.com/hanfu1".to_string(),
            sizes: vec![
                size("h1", "China", "M", "S"),
                size("h2", "China", "L", "M"),
                size("h3", "China", "XL", "L"),
            ],
            colors: vec!["Red".to_string(), "White".to_string()],
        },
        ClothingItem {
            id: "4".to_string(),
            name: "Silk Kimono".to_string(),
            description: "Hand-crafted silk kimono with traditional Japanese patterns and obi \
                          belt."
                .to_string(),
            category: ClothingCategory::Kimono,
            origin: Region::EastAsia,
            image_url: "https://images.pexels.com/photos/5706736/pexels-photo-5706736.jpeg"
                .to_string(),
            model_image_url: Some(
                "https://images.pexels.com/photos/5706736/pexels-photo-5706736.jpeg".to_string(),
            ),
            price: 199.99,
            affiliate_link: "https://example.com/kimono1".to_string(),
            sizes: vec![size("k1", "Japan", "One Size", "S-M")],
            colors: vec!["Blue".to_string(), "White".to_string()],
        },
        ClothingItem {
            id: "5".to_string(),
            name: "Men's Kurta Pajama".to_string(),
            description: "Comfortable cotton kurta with matching pajama, perfect for everyday \
                          wear or special occasions."
                .to_string(),
            category: ClothingCategory::Kurta,
            origin: Region::SouthAsia,
            image_url: "https://images.pexels.com/photos/2834653/pexels-photo-2834653.jpeg"
                .to_string(),
            model_image_url: Some(
                "https://images.pexels.com/photos/2834653/pexels-photo-2834653.jpeg".to_string(),
            ),
            price: 79.99,
            affiliate_link: "https://example.com/kurta1".to_string(),
            sizes: vec![
                size("ku1", "India", "40", "M"),
                size("ku2", "India", "42", "L"),
                size("ku3", "India", "44", "XL"),
            ],
            colors: vec!["White".to_string(), "Beige".to_string(), "Blue".to_string()],
        },
        ClothingItem {
            id: "6".to_string(),
            name: "Embroidered Cheongsam".to_string(),
            description: "Elegant silk cheongsam with floral embroidery and traditional high \
                          collar."
                .to_string(),
            category: ClothingCategory::Cheongsam,
            origin: Region::EastAsia,
            image_url: "https://images.pexels.com/photos/4937224/pexels-photo-4937224.jpeg"
                .to_string(),
            model_image_url: Some(
                "https://images.pexels.com/photos/4937224/pexels-photo-4937224.jpeg".to_string(),
            ),
            price: 159.99,
            affiliate_link: "https://example.com/cheongsam1".to_string(),
            sizes: vec![
                size("c1", "China", "S", "XS"),
                size("c2", "China", "M", "S"),
                size("c3", "China", "L", "M"),
            ],
            colors: vec!["Red".to_string(), "Gold".to_string()],
        },
    ]
}

fn showcase_author(name: &str, location: &str, avatar: &str) -> User {
    User {
        user_id: Uuid::new_v4(),
        name: name.to_string(),
        avatar: Some(avatar.to_string()),
        location: location.to_string(),
        bio: None,
    }
}

/// Showcase posts displayed by the community feed while the store holds no
/// real posts yet. Display-only: they never enter the store, so liking one
/// has no lasting effect (matching the mock feed this replaces).
pub fn seed_posts() -> Vec<FashionPost> {
    let aisha = showcase_author(
        "Aisha Johnson",
        "New York",
        "https://images.pexels.com/photos/415829/pexels-photo-415829.jpeg",
    );
    let david = showcase_author(
        "David Chen",
        "San Francisco",
        "https://images.pexels.com/photos/220453/pexels-photo-220453.jpeg",
    );
    let oluwaseun = showcase_author(
        "Oluwaseun Adebayo",
        "Houston",
        "https://images.pexels.com/photos/1239291/pexels-photo-1239291.jpeg",
    );

    vec![
        FashionPost {
            post_id: Uuid::new_v4(),
            user_id: aisha.user_id,
            user: Some(aisha),
            title: "My First Saree Experience".to_string(),
            description: "Finally found a beautiful silk saree that fits perfectly! The size \
                          guide was so helpful for getting the right length."
                .to_string(),
            image_url: "https://images.pexels.com/photos/2531734/pexels-photo-2531734.jpeg"
                .to_string(),
            likes: 24,
            created_at: Utc.with_ymd_and_hms(2023, 5, 15, 0, 0, 0).unwrap(),
            items: Vec::new(),
        },
        FashionPost {
            post_id: Uuid::new_v4(),
            user_id: david.user_id,
            user: Some(david),
            title: "Traditional Wedding Attire".to_string(),
            description: "Wore a traditional Chinese hanfu for a cultural wedding celebration. \
                          So many compliments!"
                .to_string(),
            image_url: "https://images.pexels.com/photos/5906775/pexels-photo-5906775.jpeg"
                .to_string(),
            likes: 37,
            created_at: Utc.with_ymd_and_hms(2023, 6, 2, 0, 0, 0).unwrap(),
            items: Vec::new(),
        },
        FashionPost {
            post_id: Uuid::new_v4(),
            user_id: oluwaseun.user_id,
            user: Some(oluwaseun),
            title: "Agbada for Graduation".to_string(),
            description: "Celebrating my master's graduation in style with this custom agbada. \
                          The virtual try-on helped me pick the perfect design!"
                .to_string(),
            image_url: "https://images.pexels.com/photos/13727829/pexels-photo-13727829.jpeg"
                .to_string(),
            likes: 52,
            created_at: Utc.with_ymd_and_hms(2023, 6, 20, 0, 0, 0).unwrap(),
            items: Vec::new(),
        },
    ]
}
