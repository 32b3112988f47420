//! Catalog seeder: loads the demo experiences and their slots.
//!
//! Run with `cargo run --bin daytrip-seed`. Refuses to run against a
//! non-empty catalog so a stray invocation cannot duplicate data.

use anyhow::Context;
use chrono::NaiveDate;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use daytrip_db::models::experience::CreateExperience;
use daytrip_db::models::slot::CreateSlot;
use daytrip_db::repositories::{ExperienceRepo, SlotRepo};

/// One seed slot: date, start, end, capacity, pre-booked count.
type SeedSlot = (&'static str, &'static str, &'static str, i32, i32);

/// One seed experience: name, description, location, price in cents,
/// image, rating, slots.
struct SeedExperience {
    name: &'static str,
    description: &'static str,
    location: &'static str,
    price_cents: i64,
    image_url: &'static str,
    rating: Option<f64>,
    slots: &'static [SeedSlot],
}

const DESCRIPTION: &str =
    "Curated small-group experiences. Certified guides. Safety first!";

const CATALOG: &[SeedExperience] = &[
    SeedExperience {
        name: "Kayaking",
        description: "Curated small-group experiences. Certified guides. Safety first! Includes helmet and life jacket.",
        location: "Kabini",
        price_cents: 99_900,
        image_url: "https://images.unsplash.com/photo-1507035895480-2b3156c31fc8?q=80&w=2070&auto=format&fit=crop",
        rating: Some(4.8),
        slots: &[
            ("2025-11-20", "07:00 AM", "09:00 AM", 10, 0),
            ("2025-11-20", "09:00 AM", "11:00 AM", 10, 0),
            // Sold out.
            ("2025-11-20", "11:00 AM", "01:00 PM", 5, 5),
            ("2025-11-21", "07:00 AM", "09:00 AM", 10, 0),
            ("2025-11-21", "09:00 AM", "11:00 AM", 10, 0),
            ("2025-11-22", "09:00 AM", "11:00 AM", 10, 0),
        ],
    },
    SeedExperience {
        name: "Nandi Hills Sunrise",
        description: DESCRIPTION,
        location: "Bangalore",
        price_cents: 89_900,
        image_url: "/nandihills.jpg",
        rating: Some(4.6),
        slots: &[
            ("2025-11-20", "05:00 AM", "07:00 AM", 15, 0),
            ("2025-11-21", "05:00 AM", "07:00 AM", 15, 0),
            ("2025-11-22", "05:00 AM", "07:00 AM", 15, 0),
        ],
    },
    SeedExperience {
        name: "Coffee Trail",
        description: DESCRIPTION,
        location: "Chikmagalur",
        price_cents: 129_900,
        image_url: "https://images.unsplash.com/photo-1509042239860-f550ce710b93?q=80&w=1974&auto=format&fit=crop",
        rating: Some(4.4),
        slots: &[
            ("2025-11-20", "10:00 AM", "12:00 PM", 8, 0),
            ("2025-11-21", "10:00 AM", "12:00 PM", 8, 0),
        ],
    },
    SeedExperience {
        name: "Boat Cruise",
        description: DESCRIPTION,
        location: "Goa",
        price_cents: 199_900,
        image_url: "/boat.jpg",
        rating: None,
        slots: &[("2025-11-20", "04:00 PM", "06:00 PM", 20, 0)],
    },
    SeedExperience {
        name: "Bungee Jumping",
        description: DESCRIPTION,
        location: "Rishikesh",
        price_cents: 350_000,
        image_url: "/bungee.jpg",
        rating: Some(4.9),
        slots: &[
            ("2025-11-20", "10:00 AM", "11:00 AM", 5, 0),
            ("2025-11-20", "11:00 AM", "12:00 PM", 5, 0),
            ("2025-11-21", "10:00 AM", "11:00 AM", 5, 0),
        ],
    },
    SeedExperience {
        name: "Old City Heritage Walk",
        description: DESCRIPTION,
        location: "Jaipur",
        price_cents: 60_000,
        image_url: "/old.jpg",
        rating: None,
        slots: &[
            ("2025-11-20", "08:00 AM", "10:00 AM", 12, 0),
            ("2025-11-21", "08:00 AM", "10:00 AM", 12, 0),
        ],
    },
    SeedExperience {
        name: "Scuba Diving",
        description: DESCRIPTION,
        location: "Andaman",
        price_cents: 450_000,
        image_url: "https://images.unsplash.com/photo-1544551763-46a013bb70d5?q=80&w=2070&auto=format&fit=crop",
        rating: Some(4.7),
        slots: &[
            ("2025-11-20", "09:00 AM", "11:00 AM", 8, 0),
            ("2025-11-21", "09:00 AM", "11:00 AM", 8, 0),
        ],
    },
    SeedExperience {
        name: "Tea Plantation Tour",
        description: DESCRIPTION,
        location: "Munnar",
        price_cents: 75_000,
        image_url: "/tea.jpg",
        rating: None,
        slots: &[
            ("2025-11-20", "02:00 PM", "04:00 PM", 10, 0),
            ("2025-11-21", "02:00 PM", "04:00 PM", 10, 0),
        ],
    },
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "daytrip_seed=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let pool = daytrip_db::create_pool(&database_url)
        .await
        .context("Failed to connect to database")?;
    daytrip_db::run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;

    let existing = ExperienceRepo::count(&pool).await?;
    if existing > 0 {
        tracing::info!(existing, "Catalog already seeded, nothing to do");
        return Ok(());
    }

    for seed in CATALOG {
        let experience = ExperienceRepo::create(
            &pool,
            &CreateExperience {
                name: seed.name.to_string(),
                description: seed.description.to_string(),
                location: seed.location.to_string(),
                price_cents: seed.price_cents,
                image_url: seed.image_url.to_string(),
                rating: seed.rating,
            },
        )
        .await
        .with_context(|| format!("Failed to seed experience '{}'", seed.name))?;

        for (date, start, end, capacity, booked) in seed.slots {
            let slot_date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
                .with_context(|| format!("Bad seed date '{date}'"))?;
            SlotRepo::create(
                &pool,
                &CreateSlot {
                    experience_id: experience.id,
                    slot_date,
                    start_time: (*start).to_string(),
                    end_time: (*end).to_string(),
                    capacity: *capacity,
                    booked_count: Some(*booked),
                },
            )
            .await
            .with_context(|| format!("Failed to seed slot {date} {start} for '{}'", seed.name))?;
        }

        tracing::info!(
            id = experience.id,
            name = %experience.name,
            slots = seed.slots.len(),
            "Seeded experience"
        );
    }

    tracing::info!(count = CATALOG.len(), "Catalog seeding complete");
    Ok(())
}
