//! Seed data loaded into a fresh store at startup.

use crate::models::{NewProperty, NewTestimonial, PropertyType};

const PHOTO_PARAMS: &str = "?ixlib=rb-4.0.3&auto=format&fit=crop&w=1200&h=600";
const AVATAR_PARAMS: &str = "?ixlib=rb-4.0.3&auto=format&fit=crop&w=150&h=150";

fn photos(ids: &[&str]) -> Vec<String> {
    ids.iter()
        .map(|id| format!("https://images.unsplash.com/photo-{id}{PHOTO_PARAMS}"))
        .collect()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The luxury portfolio shown on the site, in listing order.
pub fn properties() -> Vec<NewProperty> {
    vec![
        NewProperty {
            title: "Modern Hillside Villa".to_string(),
            description: "This stunning modern villa offers breathtaking views of the city skyline and Pacific Ocean. Featuring floor-to-ceiling windows, an infinity pool, and state-of-the-art smart home technology, this property represents the pinnacle of luxury living.".to_string(),
            price: "4200000".to_string(),
            location: "Beverly Hills, CA".to_string(),
            city: "Beverly Hills".to_string(),
            state: "CA".to_string(),
            property_type: PropertyType::Villa,
            bedrooms: 5,
            bathrooms: 4,
            sqft: 6500,
            images: photos(&[
                "1600596542815-ffad4c1539a9",
                "1600607687939-ce8a6c25118c",
                "1600585154340-be6161a56a0c",
            ]),
            features: strings(&[
                "Infinity Pool",
                "Smart Home System",
                "Panoramic Views",
                "Gourmet Kitchen",
                "Wine Cellar",
                "Home Theater",
                "Guest House",
                "3-Car Garage",
            ]),
            is_available: true,
            is_featured: true,
        },
        NewProperty {
            title: "Sky Tower Penthouse".to_string(),
            description: "Located on the 45th floor, this exceptional penthouse offers unparalleled views of Central Park and the Manhattan skyline. Premium finishes and custom millwork throughout create an atmosphere of sophisticated elegance.".to_string(),
            price: "6800000".to_string(),
            location: "Manhattan, NY".to_string(),
            city: "Manhattan".to_string(),
            state: "NY".to_string(),
            property_type: PropertyType::Penthouse,
            bedrooms: 4,
            bathrooms: 3,
            sqft: 4200,
            images: photos(&[
                "1600607687939-ce8a6c25118c",
                "1600596542815-ffad4c1539a9",
                "1600585154340-be6161a56a0c",
            ]),
            features: strings(&[
                "Central Park Views",
                "Private Elevator",
                "Marble Finishes",
                "Chef's Kitchen",
                "Master Suite",
                "Library",
                "Terrace",
                "Concierge Service",
            ]),
            is_available: true,
            is_featured: true,
        },
        NewProperty {
            title: "Oceanfront Estate".to_string(),
            description: "This magnificent oceanfront estate sits on 2 acres of pristine coastline. With private beach access, a resort-style pool, and multiple entertaining spaces, it's perfect for the ultimate California lifestyle.".to_string(),
            price: "8900000".to_string(),
            location: "Malibu, CA".to_string(),
            city: "Malibu".to_string(),
            state: "CA".to_string(),
            property_type: PropertyType::Mansion,
            bedrooms: 6,
            bathrooms: 5,
            sqft: 8200,
            images: photos(&[
                "1600585154340-be6161a56a0c",
                "1600596542815-ffad4c1539a9",
                "1613490493576-7fde63acd811",
            ]),
            features: strings(&[
                "Private Beach",
                "Resort Pool",
                "Beach Access",
                "Outdoor Kitchen",
                "Tennis Court",
                "Spa",
                "Guest Cottages",
                "Boat Dock",
            ]),
            is_available: true,
            is_featured: true,
        },
        NewProperty {
            title: "Glass House Modern".to_string(),
            description: "An architectural masterpiece featuring floor-to-ceiling glass walls and an open-concept design. This ultra-modern home seamlessly blends indoor and outdoor living with premium materials throughout.".to_string(),
            price: "5400000".to_string(),
            location: "Austin, TX".to_string(),
            city: "Austin".to_string(),
            state: "TX".to_string(),
            property_type: PropertyType::Mansion,
            bedrooms: 4,
            bathrooms: 4,
            sqft: 5800,
            images: photos(&[
                "1613490493576-7fde63acd811",
                "1600566753190-17f0baa2a6c3",
                "1600047509358-9dc75507daeb",
            ]),
            features: strings(&[
                "Glass Walls",
                "Open Concept",
                "Modern Design",
                "Premium Materials",
                "Smart Technology",
                "Outdoor Living",
                "Minimalist Style",
                "Energy Efficient",
            ]),
            is_available: true,
            is_featured: true,
        },
        NewProperty {
            title: "Downtown Luxury Loft".to_string(),
            description: "This converted warehouse loft combines industrial charm with modern luxury. Exposed brick walls, soaring ceilings, and premium finishes create a unique urban oasis in the heart of downtown.".to_string(),
            price: "3200000".to_string(),
            location: "Chicago, IL".to_string(),
            city: "Chicago".to_string(),
            state: "IL".to_string(),
            property_type: PropertyType::Loft,
            bedrooms: 3,
            bathrooms: 2,
            sqft: 3400,
            images: photos(&[
                "1600566753190-17f0baa2a6c3",
                "1600047509358-9dc75507daeb",
                "1600596542815-ffad4c1539a9",
            ]),
            features: strings(&[
                "Exposed Brick",
                "High Ceilings",
                "Industrial Design",
                "Urban Location",
                "Rooftop Access",
                "Modern Kitchen",
                "Hardwood Floors",
                "City Views",
            ]),
            is_available: true,
            is_featured: true,
        },
        NewProperty {
            title: "Smart Home Paradise".to_string(),
            description: "The future of home living is here. This smart home features cutting-edge automation, sustainable design, and premium amenities. Control everything from lighting to security with your smartphone.".to_string(),
            price: "2800000".to_string(),
            location: "Seattle, WA".to_string(),
            city: "Seattle".to_string(),
            state: "WA".to_string(),
            property_type: PropertyType::Villa,
            bedrooms: 4,
            bathrooms: 3,
            sqft: 4600,
            images: photos(&[
                "1600047509358-9dc75507daeb",
                "1600596542815-ffad4c1539a9",
                "1600566753190-17f0baa2a6c3",
            ]),
            features: strings(&[
                "Smart Automation",
                "Sustainable Design",
                "Voice Control",
                "Energy Efficient",
                "Security System",
                "Modern Kitchen",
                "Home Office",
                "Garden Views",
            ]),
            is_available: true,
            is_featured: true,
        },
    ]
}

pub fn testimonials() -> Vec<NewTestimonial> {
    let avatar = |id: &str| Some(format!("https://images.unsplash.com/photo-{id}{AVATAR_PARAMS}"));

    vec![
        NewTestimonial {
            name: "Sarah Johnson".to_string(),
            role: "CEO, Tech Innovations".to_string(),
            content: "Exceptional service and attention to detail. The team found us our dream penthouse in record time.".to_string(),
            rating: 5,
            avatar: avatar("1494790108755-2616b612b47c"),
            is_active: true,
        },
        NewTestimonial {
            name: "Michael Chen".to_string(),
            role: "Investment Banker".to_string(),
            content: "Professional, knowledgeable, and truly caring. They made the entire process seamless and enjoyable.".to_string(),
            rating: 5,
            avatar: avatar("1472099645785-5658abf4ff4e"),
            is_active: true,
        },
        NewTestimonial {
            name: "Emma Rodriguez".to_string(),
            role: "Interior Designer".to_string(),
            content: "Their market knowledge and negotiation skills saved us hundreds of thousands. Highly recommended!".to_string(),
            rating: 5,
            avatar: avatar("1438761681033-6461ffad8d80"),
            is_active: true,
        },
    ]
}
