//! Startup reseeding of the dealer collection.
//!
//! `reseed` wipes every stored dealer and bulk-inserts the fixed sample set.
//! It is destructive and only ever called from `main` before the server
//! starts accepting requests.

use crate::db::{Database, StoreResult};
use common::model::dealer::{Dealer, Location, NewDealer};
use common::model::review::NewReview;
use log::info;

fn dealer(
    name: &str,
    state: &str,
    city: &str,
    address: &str,
    reviews: Vec<NewReview>,
) -> NewDealer {
    NewDealer {
        name: name.to_string(),
        location: Location {
            state: state.to_string(),
            city: city.to_string(),
        },
        address: address.to_string(),
        reviews,
    }
}

/// The fixed sample dataset: 7 dealers across Kansas, California and Texas.
pub fn sample_dealers() -> Vec<NewDealer> {
    vec![
        dealer(
            "Kansas City Motors",
            "Kansas",
            "Kansas City",
            "123 Auto Drive",
            vec![
                NewReview::new("John Doe", 5, "Great service and friendly staff!"),
                NewReview::new("Sarah Wilson", 4, "Good selection of cars, slightly pricey"),
            ],
        ),
        dealer(
            "Topeka Premium Cars",
            "Kansas",
            "Topeka",
            "456 Car Street",
            vec![
                NewReview::new("Jane Smith", 4, "Professional dealership experience"),
                NewReview::new("Mike Johnson", 5, "Best prices in town!"),
            ],
        ),
        dealer(
            "California Dream Cars",
            "California",
            "Los Angeles",
            "789 Sunset Boulevard",
            vec![
                NewReview::new("Tom Brown", 5, "Excellent luxury car selection"),
                NewReview::new("Emily Davis", 3, "Good cars but long waiting times"),
            ],
        ),
        dealer(
            "Bay Area Motors",
            "California",
            "San Francisco",
            "321 Tech Road",
            vec![NewReview::new(
                "David Chen",
                5,
                "Amazing electric vehicle inventory",
            )],
        ),
        dealer(
            "Texas Grand Autos",
            "Texas",
            "Houston",
            "555 Rodeo Drive",
            vec![
                NewReview::new("James Wilson", 4, "Great truck selection"),
                NewReview::new("Maria Garcia", 5, "Fantastic customer service!"),
                NewReview::new("Robert Taylor", 4, "Fair prices and good maintenance service"),
            ],
        ),
        dealer(
            "Dallas Premium Vehicles",
            "Texas",
            "Dallas",
            "777 Cowboy Lane",
            vec![
                NewReview::new("Lisa Anderson", 5, "Outstanding luxury car experience"),
                NewReview::new("Kevin Martinez", 4, "Good selection of both new and used cars"),
            ],
        ),
        dealer(
            "Wichita Auto Gallery",
            "Kansas",
            "Wichita",
            "999 Central Avenue",
            vec![
                NewReview::new("Chris Thompson", 4, "Honest dealers and fair prices"),
                NewReview::new("Amanda White", 5, "Best dealership experience in Kansas!"),
                NewReview::new("Daniel Lee", 4, "Great selection of family cars"),
            ],
        ),
    ]
}

/// Clears the collection and inserts the sample dealers.
pub async fn reseed(db: &Database) -> StoreResult<Vec<Dealer>> {
    let removed = db.delete_all().await?;
    info!("Cleared {} existing dealers", removed);

    let inserted = db.insert_many(sample_dealers()).await?;
    info!("Successfully added {} dealers", inserted.len());
    Ok(inserted)
}
