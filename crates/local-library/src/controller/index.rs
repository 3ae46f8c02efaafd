use super::{reads, take, CatalogController, CatalogRead, Response};
use crate::aggregate::Aggregation;
use crate::error::CatalogError;
use crate::model::BookInstanceStatus;
use serde_json::{json, Map, Value};
use tracing::{instrument, warn};

const COUNTS: [&str; 5] = [
    "book_count",
    "book_instance_count",
    "book_instance_available_count",
    "author_count",
    "genre_count",
];

impl CatalogController {
    /// Home page: five collection counts.
    ///
    /// A failed count does not go to the error handler; the page is rendered with the
    /// error attached and no data.
    #[instrument(skip(self))]
    pub async fn index(&self) -> Result<Response, CatalogError> {
        let catalog = &self.catalog;
        let outcome = Aggregation::new()
            .branch(COUNTS[0], reads::count_books(catalog))
            .branch(COUNTS[1], reads::count_book_instances(catalog))
            .branch(
                COUNTS[2],
                reads::count_book_instances_with_status(catalog, BookInstanceStatus::Available),
            )
            .branch(COUNTS[3], reads::count_authors(catalog))
            .branch(COUNTS[4], reads::count_genres(catalog))
            .join()
            .await;

        let (error, data) = match outcome {
            Ok(mut results) => {
                let mut data = Map::new();
                for name in COUNTS {
                    let count = take(&mut results, name, CatalogRead::into_count)?;
                    data.insert(name.to_string(), Value::from(count));
                }
                (Value::Null, Value::Object(data))
            }
            Err(e) => {
                let e = CatalogError::from(e);
                warn!(error = %e, "Home page counts failed");
                (Value::String(e.to_string()), Value::Null)
            }
        };

        Ok(Response::render(
            "index",
            json!({ "title": "Local Library Home", "error": error, "data": data }),
        ))
    }
}
