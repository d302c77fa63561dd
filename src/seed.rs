use crate::catalog::CatalogStore;
use crate::error::CatalogError;
use crate::models::{CategoryRatings, ContentType, ItemDraft, ListFilter, StreamingPlatform};
use tracing::info;

/// Result of a seed request. Seeding refuses to run twice: a populated
/// catalog is reported back instead of duplicated.
pub enum SeedOutcome {
    Seeded(usize),
    AlreadyPopulated(usize),
}

/// Thin wrapper over repeated `create` calls; carries no logic of its own.
pub async fn seed_catalog(store: &dyn CatalogStore) -> Result<SeedOutcome, CatalogError> {
    let existing = store.list(ListFilter::default()).await?;
    if !existing.is_empty() {
        return Ok(SeedOutcome::AlreadyPopulated(existing.len()));
    }

    let drafts = demo_drafts();
    let count = drafts.len();
    for draft in drafts {
        store.create(draft).await?;
    }
    info!("Seeded catalog with {} demonstration items", count);
    Ok(SeedOutcome::Seeded(count))
}

fn entry(
    title: &str,
    content_type: ContentType,
    year: i32,
    genre: &str,
    platform: StreamingPlatform,
    description: &str,
    scores: [f64; 7],
) -> ItemDraft {
    let [story, acting, direction, music_sound, cinematography, action_stunts, emotional_impact] =
        scores;
    ItemDraft {
        title: title.to_string(),
        content_type,
        year,
        genre: genre.to_string(),
        streaming_platform: platform,
        description: Some(description.to_string()),
        ratings: CategoryRatings {
            story,
            acting,
            direction,
            music_sound,
            cinematography,
            action_stunts,
            emotional_impact,
        },
    }
}

/// Fixed demonstration set: six Netflix and six Amazon Prime Video entries,
/// three movies and three series on each platform.
fn demo_drafts() -> Vec<ItemDraft> {
    use ContentType::{Movie, TvSeries};
    use StreamingPlatform::{AmazonPrimeVideo, Netflix};

    vec![
        entry(
            "The Irishman",
            Movie,
            2019,
            "Crime",
            Netflix,
            "An aging hitman recalls his time with the mob and the hand he had in the disappearance of Jimmy Hoffa.",
            [8.5, 9.5, 9.0, 7.5, 8.5, 6.5, 8.0],
        ),
        entry(
            "Roma",
            Movie,
            2018,
            "Drama",
            Netflix,
            "A year in the life of a middle-class family's maid in Mexico City in the early 1970s.",
            [8.0, 9.0, 9.5, 7.0, 10.0, 4.0, 9.5],
        ),
        entry(
            "Extraction",
            Movie,
            2020,
            "Action",
            Netflix,
            "A black-market mercenary is hired to rescue the kidnapped son of an imprisoned crime lord.",
            [6.5, 7.0, 7.5, 7.0, 8.0, 9.5, 6.0],
        ),
        entry(
            "Stranger Things",
            TvSeries,
            2016,
            "Science Fiction",
            Netflix,
            "A group of kids uncover supernatural forces and secret government experiments in their small town.",
            [9.0, 8.5, 8.5, 9.5, 8.0, 7.5, 8.5],
        ),
        entry(
            "The Crown",
            TvSeries,
            2016,
            "Historical Drama",
            Netflix,
            "The political rivalries and romances of Queen Elizabeth II's reign.",
            [8.5, 9.5, 9.0, 8.5, 9.0, 3.0, 8.0],
        ),
        entry(
            "Squid Game",
            TvSeries,
            2021,
            "Thriller",
            Netflix,
            "Hundreds of cash-strapped players accept an invitation to compete in deadly children's games.",
            [9.5, 8.5, 9.0, 8.0, 8.5, 8.0, 9.0],
        ),
        entry(
            "The Tomorrow War",
            Movie,
            2021,
            "Science Fiction",
            AmazonPrimeVideo,
            "Soldiers are drafted from the present to fight a war against aliens thirty years in the future.",
            [6.0, 6.5, 6.5, 7.0, 7.5, 8.5, 6.0],
        ),
        entry(
            "Sound of Metal",
            Movie,
            2019,
            "Drama",
            AmazonPrimeVideo,
            "A heavy-metal drummer's life is thrown into freefall when he begins to lose his hearing.",
            [9.0, 9.5, 8.5, 9.5, 8.0, 2.0, 9.5],
        ),
        entry(
            "The Big Sick",
            Movie,
            2017,
            "Romantic Comedy",
            AmazonPrimeVideo,
            "A comedian's cross-cultural romance is tested when his girlfriend falls into a mysterious coma.",
            [8.5, 8.0, 7.5, 6.5, 7.0, 2.5, 9.0],
        ),
        entry(
            "The Boys",
            TvSeries,
            2019,
            "Superhero",
            AmazonPrimeVideo,
            "Vigilantes take on superheroes who abuse their celebrity and corporate backing.",
            [9.0, 8.5, 8.5, 7.5, 8.0, 9.0, 7.5],
        ),
        entry(
            "The Marvelous Mrs. Maisel",
            TvSeries,
            2017,
            "Comedy",
            AmazonPrimeVideo,
            "A 1950s housewife discovers she has a knack for stand-up comedy.",
            [8.5, 9.5, 8.5, 9.0, 9.5, 2.0, 8.0],
        ),
        entry(
            "Invincible",
            TvSeries,
            2021,
            "Animation",
            AmazonPrimeVideo,
            "A teenager inherits his father's superpowers and discovers his legacy is not what it seems.",
            [9.0, 8.0, 8.0, 7.5, 7.5, 9.5, 8.5],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MemoryCatalog;
    use crate::rating;

    #[tokio::test]
    async fn seeds_twelve_items_with_consistent_overalls() {
        let store = MemoryCatalog::new();
        match seed_catalog(&store).await.unwrap() {
            SeedOutcome::Seeded(n) => assert_eq!(n, 12),
            SeedOutcome::AlreadyPopulated(_) => panic!("fresh store should seed"),
        }

        let items = store.list(ListFilter::default()).await.unwrap();
        assert_eq!(items.len(), 12);
        for item in &items {
            assert_eq!(item.overall_rating, rating::compute_overall(&item.ratings));
        }

        let netflix = items
            .iter()
            .filter(|i| i.streaming_platform == StreamingPlatform::Netflix)
            .count();
        let movies = items
            .iter()
            .filter(|i| i.content_type == ContentType::Movie)
            .count();
        assert_eq!(netflix, 6);
        assert_eq!(movies, 6);
    }

    #[tokio::test]
    async fn second_seed_is_a_no_op() {
        let store = MemoryCatalog::new();
        seed_catalog(&store).await.unwrap();
        match seed_catalog(&store).await.unwrap() {
            SeedOutcome::AlreadyPopulated(n) => assert_eq!(n, 12),
            SeedOutcome::Seeded(_) => panic!("populated store must not reseed"),
        }
        assert_eq!(store.list(ListFilter::default()).await.unwrap().len(), 12);
    }
}
