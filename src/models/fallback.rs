use crate::models::Listing;
use serde_json::{Map, Value};

/// Listings served when the storage backend cannot be read
///
/// Also used to seed an empty listings table at startup.
pub fn fallback_listings() -> Vec<Listing> {
    vec![
        Listing {
            id: Some(Value::from("h001")),
            city: Some("Hoboken".into()),
            street_address: "215 River St".into(),
            rent: 1850,
            lease_duration: Some("12 months".into()),
            availability_date: Some("2025-04-15".into()),
            furnished: Some(true),
            utilities_included: Some(true),
            wifi_available: Some(true),
            no_of_bedrooms: Some(1),
            no_of_bathrooms: Some(1),
            house_type: Some("Apartment".into()),
            distance_to_college: Some("0.3 miles".into()),
            transportation_options: strings(&["Bus", "Path Train"]),
            recommended_by: Some("John Smith".into()),
            contact_details: Some("15551112233".into()),
            image_urls: strings(&["assets/house1.jpg", "assets/house1_2.jpg", "assets/house1_3.jpg"]),
            extra: Map::new(),
        },
        Listing {
            id: Some(Value::from("h002")),
            city: Some("Hoboken".into()),
            street_address: "78 Washington St".into(),
            rent: 2100,
            lease_duration: Some("9 months".into()),
            availability_date: Some("2025-04-10".into()),
            furnished: Some(true),
            utilities_included: Some(true),
            wifi_available: Some(true),
            no_of_bedrooms: Some(1),
            no_of_bathrooms: Some(1),
            house_type: Some("Studio".into()),
            distance_to_college: Some("0.2 miles".into()),
            transportation_options: strings(&["Bus", "Path Train"]),
            recommended_by: Some("Sarah Johnson".into()),
            contact_details: Some("15551115566".into()),
            image_urls: strings(&["assets/house2.jpg", "assets/house2_2.jpg", "assets/house2_3.jpg"]),
            extra: Map::new(),
        },
        Listing {
            id: Some(Value::from("h003")),
            city: Some("Hoboken".into()),
            street_address: "420 Hudson St".into(),
            rent: 2650,
            lease_duration: Some("12 months".into()),
            availability_date: Some("2025-05-01".into()),
            furnished: Some(true),
            utilities_included: Some(false),
            wifi_available: Some(true),
            no_of_bedrooms: Some(2),
            no_of_bathrooms: Some(1),
            house_type: Some("Apartment".into()),
            distance_to_college: Some("0.4 miles".into()),
            transportation_options: strings(&["Bus", "Path Train"]),
            recommended_by: Some("Mike Peters".into()),
            contact_details: Some("15551117788".into()),
            image_urls: strings(&["assets/house3.jpg", "assets/house3_2.jpg"]),
            extra: Map::new(),
        },
        Listing {
            id: Some(Value::from("h004")),
            city: Some("Jersey City".into()),
            street_address: "25 River Dr".into(),
            rent: 1950,
            lease_duration: Some("6 months".into()),
            availability_date: Some("2025-04-05".into()),
            furnished: Some(false),
            utilities_included: Some(false),
            wifi_available: Some(false),
            no_of_bedrooms: Some(1),
            no_of_bathrooms: Some(1),
            house_type: Some("Condo".into()),
            distance_to_college: Some("1.2 miles".into()),
            transportation_options: strings(&["Bus", "Path Train", "Light Rail"]),
            recommended_by: Some("Jane Doe".into()),
            contact_details: Some("15551118899".into()),
            image_urls: strings(&["assets/house4.jpg"]),
            extra: Map::new(),
        },
        Listing {
            id: Some(Value::from("h005")),
            city: Some("Hoboken".into()),
            street_address: "89 Willow Ave".into(),
            rent: 1700,
            lease_duration: Some("12 months".into()),
            availability_date: Some("2025-04-20".into()),
            furnished: Some(false),
            utilities_included: Some(true),
            wifi_available: Some(true),
            no_of_bedrooms: Some(1),
            no_of_bathrooms: Some(1),
            house_type: Some("Apartment".into()),
            distance_to_college: Some("0.5 miles".into()),
            transportation_options: strings(&["Bus"]),
            recommended_by: Some("Robert Chen".into()),
            contact_details: Some("15551119900".into()),
            image_urls: strings(&["assets/house5.jpg", "assets/house5_2.jpg"]),
            extra: Map::new(),
        },
        Listing {
            id: Some(Value::from("h006")),
            city: Some("Hoboken".into()),
            street_address: "505 Madison St".into(),
            rent: 3200,
            lease_duration: Some("12 months".into()),
            availability_date: Some("2025-05-15".into()),
            furnished: Some(true),
            utilities_included: Some(true),
            wifi_available: Some(true),
            no_of_bedrooms: Some(3),
            no_of_bathrooms: Some(2),
            house_type: Some("Townhouse".into()),
            distance_to_college: Some("0.7 miles".into()),
            transportation_options: strings(&["Bus", "Path Train"]),
            recommended_by: Some("Lisa Martinez".into()),
            contact_details: Some("15551110011".into()),
            image_urls: strings(&["assets/house6.jpg", "assets/house6_2.jpg", "assets/house6_3.jpg"]),
            extra: Map::new(),
        },
        Listing {
            id: Some(Value::from("h007")),
            city: Some("Hoboken".into()),
            street_address: "123 Clinton St".into(),
            rent: 2000,
            lease_duration: Some("9 months".into()),
            availability_date: Some("2025-04-01".into()),
            furnished: Some(true),
            utilities_included: Some(false),
            wifi_available: Some(true),
            no_of_bedrooms: Some(1),
            no_of_bathrooms: Some(1),
            house_type: Some("Apartment".into()),
            distance_to_college: Some("0.4 miles".into()),
            transportation_options: strings(&["Bus"]),
            recommended_by: Some("David Wilson".into()),
            contact_details: Some("15551112222".into()),
            image_urls: strings(&["assets/house7.jpg"]),
            extra: Map::new(),
        },
        Listing {
            id: Some(Value::from("h008")),
            city: Some("Weehawken".into()),
            street_address: "50 Harbor Blvd".into(),
            rent: 2300,
            lease_duration: Some("12 months".into()),
            availability_date: Some("2025-05-10".into()),
            furnished: Some(false),
            utilities_included: Some(false),
            wifi_available: Some(true),
            no_of_bedrooms: Some(1),
            no_of_bathrooms: Some(1),
            house_type: Some("Apartment".into()),
            distance_to_college: Some("1.8 miles".into()),
            transportation_options: strings(&["Bus", "Ferry"]),
            recommended_by: Some("Amanda Thompson".into()),
            contact_details: Some("15551113333".into()),
            image_urls: strings(&["assets/house8.jpg", "assets/house8_2.jpg"]),
            extra: Map::new(),
        },
    ]
}

/// The fallback dataset in the same raw row form storage reads return
pub fn fallback_inventory() -> Vec<Value> {
    fallback_listings()
        .iter()
        .filter_map(|listing| serde_json::to_value(listing).ok())
        .collect()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
