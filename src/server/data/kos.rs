//! Kos listing repository.
//!
//! Handles the `posts` + `kos` pair as one listing: creation inserts both rows,
//! reads join them, soft deletion marks the post. Search filters and ranking are
//! evaluated by the database; listing cards are enriched with owners, ratings and
//! primary photos in batched follow-up queries.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, ExprTrait, Query},
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select, SelectTwo,
};

use crate::{
    model::{api::PageRequest, kos::KosSort},
    server::model::{
        kos::{CreateKosParam, Kos, KosFilter, KosListing, KosOwner, UpdateKosParam},
        photo::Photo,
    },
};

/// Average review rating, zero when unreviewed.
const AVERAGE_RATING_SQL: &str =
    "COALESCE((SELECT AVG(r.rating) FROM reviews r WHERE r.kos_id = kos.id), 0)";

/// Weighted quality score: rating 0.4, review count 0.2, favorite count 0.2,
/// photo count 0.1, view count 0.1.
const QUALITY_SCORE_SQL: &str = "(\
    COALESCE((SELECT AVG(r.rating) FROM reviews r WHERE r.kos_id = kos.id), 0) * 0.4 \
    + posts.review_count * 0.2 \
    + posts.favorite_count * 0.2 \
    + (SELECT COUNT(*) FROM kos_photos p WHERE p.kos_id = kos.id) * 0.1 \
    + posts.view_count * 0.1)";

/// Which kind of counter on `posts` to adjust.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostCounter {
    Favorite,
    Review,
}

impl PostCounter {
    fn column(&self) -> entity::post::Column {
        match self {
            Self::Favorite => entity::post::Column::FavoriteCount,
            Self::Review => entity::post::Column::ReviewCount,
        }
    }
}

pub struct KosRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> KosRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    fn joined() -> SelectTwo<entity::kos::Entity, entity::post::Entity> {
        entity::prelude::Kos::find().find_also_related(entity::prelude::Post)
    }

    fn merge(row: (entity::kos::Model, Option<entity::post::Model>)) -> Result<Kos, DbErr> {
        let (kos, post) = row;
        let post = post.ok_or_else(|| {
            DbErr::RecordNotFound(format!("Post {} for kos {} is missing", kos.post_id, kos.id))
        })?;

        Kos::from_entities(post, kos)
    }

    /// Inserts a post and its kos row. Run inside a transaction.
    pub async fn create(&self, param: CreateKosParam) -> Result<Kos, DbErr> {
        let now = Utc::now();
        let post = entity::post::ActiveModel {
            user_id: ActiveValue::Set(param.owner_id),
            title: ActiveValue::Set(param.title),
            description: ActiveValue::Set(param.description),
            price: ActiveValue::Set(param.price),
            view_count: ActiveValue::Set(0),
            favorite_count: ActiveValue::Set(0),
            review_count: ActiveValue::Set(0),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
            deleted_by: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let kos = entity::kos::ActiveModel {
            post_id: ActiveValue::Set(post.id),
            address: ActiveValue::Set(param.address),
            city: ActiveValue::Set(param.city),
            total_rooms: ActiveValue::Set(param.total_rooms),
            occupied_rooms: ActiveValue::Set(param.occupied_rooms),
            latitude: ActiveValue::Set(param.latitude),
            longitude: ActiveValue::Set(param.longitude),
            facilities: ActiveValue::Set(param.facilities),
            kos_type: ActiveValue::Set(param.kos_type.as_str().to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Kos::from_entities(post, kos)
    }

    /// Finds a kos by id, including soft-deleted listings.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Kos>, DbErr> {
        Self::joined()
            .filter(entity::kos::Column::Id.eq(id))
            .one(self.db)
            .await?
            .map(Self::merge)
            .transpose()
    }

    /// Finds a kos by id, ignoring soft-deleted listings.
    pub async fn find_active_by_id(&self, id: i32) -> Result<Option<Kos>, DbErr> {
        Ok(self.find_by_id(id).await?.filter(|kos| !kos.is_deleted()))
    }

    /// Applies a partial update to the post and kos rows.
    ///
    /// # Returns
    /// - `Ok(Some(Kos))` - Updated listing
    /// - `Ok(None)` - No kos with that id
    pub async fn update(&self, id: i32, param: UpdateKosParam) -> Result<Option<Kos>, DbErr> {
        let Some((kos, Some(post))) = Self::joined()
            .filter(entity::kos::Column::Id.eq(id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut post: entity::post::ActiveModel = post.into();
        if let Some(title) = param.title {
            post.title = ActiveValue::Set(title);
        }
        if let Some(description) = param.description {
            post.description = ActiveValue::Set(Some(description).filter(|d| !d.trim().is_empty()));
        }
        if let Some(price) = param.price {
            post.price = ActiveValue::Set(price);
        }
        post.updated_at = ActiveValue::Set(Utc::now());

        let unchanged = kos.clone();
        let mut kos: entity::kos::ActiveModel = kos.into();
        if let Some(address) = param.address {
            kos.address = ActiveValue::Set(address);
        }
        if let Some(city) = param.city {
            kos.city = ActiveValue::Set(city);
        }
        if let Some(total_rooms) = param.total_rooms {
            kos.total_rooms = ActiveValue::Set(total_rooms);
        }
        if let Some(occupied_rooms) = param.occupied_rooms {
            kos.occupied_rooms = ActiveValue::Set(occupied_rooms);
        }
        if let Some(latitude) = param.latitude {
            kos.latitude = ActiveValue::Set(Some(latitude));
        }
        if let Some(longitude) = param.longitude {
            kos.longitude = ActiveValue::Set(Some(longitude));
        }
        if let Some(facilities) = param.facilities {
            kos.facilities = ActiveValue::Set(Some(facilities).filter(|f| !f.trim().is_empty()));
        }
        if let Some(kos_type) = param.kos_type {
            kos.kos_type = ActiveValue::Set(kos_type.as_str().to_string());
        }

        let post = post.update(self.db).await?;
        let kos = if kos.is_changed() {
            kos.update(self.db).await?
        } else {
            unchanged
        };

        Kos::from_entities(post, kos).map(Some)
    }

    /// Marks the listing's post as deleted.
    ///
    /// # Returns
    /// - `Ok(true)` - Listing was active and is now deleted
    /// - `Ok(false)` - Already deleted
    pub async fn soft_delete(&self, post_id: i32, deleted_by: i32) -> Result<bool, DbErr> {
        let now = Utc::now();
        let result = entity::prelude::Post::update_many()
            .col_expr(entity::post::Column::DeletedAt, Expr::value(now))
            .col_expr(entity::post::Column::DeletedBy, Expr::value(deleted_by))
            .col_expr(entity::post::Column::UpdatedAt, Expr::value(now))
            .filter(entity::post::Column::Id.eq(post_id))
            .filter(entity::post::Column::DeletedAt.is_null())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn increment_view_count(&self, post_id: i32) -> Result<(), DbErr> {
        entity::prelude::Post::update_many()
            .col_expr(
                entity::post::Column::ViewCount,
                Expr::col(entity::post::Column::ViewCount).add(1),
            )
            .filter(entity::post::Column::Id.eq(post_id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Adds `delta` to a post counter. Decrements never take the counter below zero.
    pub async fn adjust_counter(
        &self,
        post_id: i32,
        counter: PostCounter,
        delta: i32,
    ) -> Result<(), DbErr> {
        let column = counter.column();
        let mut update = entity::prelude::Post::update_many()
            .col_expr(column, Expr::col(column).add(delta))
            .filter(entity::post::Column::Id.eq(post_id));
        if delta < 0 {
            update = update.filter(column.gte(-delta));
        }

        update.exec(self.db).await?;

        Ok(())
    }

    /// Searches active listings with `filter`, ordered by `filter.sort`.
    ///
    /// # Returns
    /// - `Ok((kos, total))` - Listings for the requested page and the total matching count
    pub async fn search(
        &self,
        filter: &KosFilter,
        page: PageRequest,
    ) -> Result<(Vec<Kos>, u64), DbErr> {
        let query = Self::apply_sort(Self::apply_filter(Self::joined(), filter), filter.sort);

        let paginator = query.paginate(self.db, page.per_page);
        let total = paginator.num_items().await?;
        let kos = paginator
            .fetch_page(page.index())
            .await?
            .into_iter()
            .map(Self::merge)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((kos, total))
    }

    fn apply_filter(
        mut query: SelectTwo<entity::kos::Entity, entity::post::Entity>,
        filter: &KosFilter,
    ) -> SelectTwo<entity::kos::Entity, entity::post::Entity> {
        query = query
            .filter(entity::post::Column::DeletedAt.is_null())
            .filter(
                entity::post::Column::UserId.not_in_subquery(
                    Query::select()
                        .column(entity::user::Column::Id)
                        .from(entity::user::Entity)
                        .and_where(entity::user::Column::DeletedAt.is_not_null())
                        .to_owned(),
                ),
            );

        if let Some(q) = &filter.q {
            query = query.filter(
                Condition::any()
                    .add(entity::post::Column::Title.contains(q))
                    .add(entity::kos::Column::Address.contains(q))
                    .add(entity::kos::Column::City.contains(q)),
            );
        }
        if let Some(city) = &filter.city {
            query = query.filter(entity::kos::Column::City.contains(city));
        }
        if let Some(kos_type) = filter.kos_type {
            query = query.filter(entity::kos::Column::KosType.eq(kos_type.as_str()));
        }
        if let Some(min_price) = filter.min_price {
            query = query.filter(entity::post::Column::Price.gte(min_price));
        }
        if let Some(max_price) = filter.max_price {
            query = query.filter(entity::post::Column::Price.lte(max_price));
        }
        if filter.available_only {
            query = query.filter(
                Expr::col((entity::kos::Entity, entity::kos::Column::OccupiedRooms))
                    .lt(Expr::col((entity::kos::Entity, entity::kos::Column::TotalRooms))),
            );
        }
        if let Some(owner_id) = filter.owner_id {
            query = query.filter(entity::post::Column::UserId.eq(owner_id));
        }

        query
    }

    fn apply_sort(
        query: SelectTwo<entity::kos::Entity, entity::post::Entity>,
        sort: KosSort,
    ) -> SelectTwo<entity::kos::Entity, entity::post::Entity> {
        let query = match sort {
            KosSort::Newest => query.order_by_desc(entity::post::Column::CreatedAt),
            KosSort::PriceAsc => query.order_by_asc(entity::post::Column::Price),
            KosSort::PriceDesc => query.order_by_desc(entity::post::Column::Price),
            KosSort::Popular => query.order_by_desc(entity::post::Column::ViewCount),
            KosSort::Rating => query.order_by_desc(Expr::cust(AVERAGE_RATING_SQL)),
            KosSort::Quality => query.order_by_desc(Expr::cust(QUALITY_SCORE_SQL)),
        };

        // Stable order across pages.
        query.order_by_desc(entity::kos::Column::Id)
    }

    /// Enriches kos with owner, average rating and primary photo, preserving order.
    pub async fn into_listings(&self, kos: Vec<Kos>) -> Result<Vec<KosListing>, DbErr> {
        if kos.is_empty() {
            return Ok(Vec::new());
        }

        let kos_ids: Vec<i32> = kos.iter().map(|k| k.id).collect();
        let owner_ids: Vec<i32> = kos.iter().map(|k| k.owner_id).collect();

        let owners: HashMap<i32, KosOwner> = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(owner_ids))
            .all(self.db)
            .await?
            .iter()
            .map(|user| (user.id, KosOwner::from_entity(user)))
            .collect();

        let ratings = self.average_ratings(&kos_ids).await?;

        let mut primary_photos: HashMap<i32, Photo> = entity::prelude::KosPhoto::find()
            .filter(entity::kos_photo::Column::KosId.is_in(kos_ids))
            .filter(entity::kos_photo::Column::IsPrimary.eq(true))
            .all(self.db)
            .await?
            .into_iter()
            .map(|photo| (photo.kos_id, Photo::from_entity(photo)))
            .collect();

        kos.into_iter()
            .map(|kos| {
                let owner = owners.get(&kos.owner_id).cloned().ok_or_else(|| {
                    DbErr::RecordNotFound(format!(
                        "Owner {} of kos {} is missing",
                        kos.owner_id, kos.id
                    ))
                })?;

                Ok(KosListing {
                    average_rating: ratings.get(&kos.id).copied().unwrap_or(0.0),
                    primary_photo: primary_photos.remove(&kos.id),
                    owner,
                    kos,
                })
            })
            .collect()
    }

    /// Average rating per kos for the given ids. Unreviewed kos are absent.
    pub async fn average_ratings(&self, kos_ids: &[i32]) -> Result<HashMap<i32, f64>, DbErr> {
        let rows: Vec<(i32, i32)> = entity::prelude::Review::find()
            .select_only()
            .column(entity::review::Column::KosId)
            .column(entity::review::Column::Rating)
            .filter(entity::review::Column::KosId.is_in(kos_ids.to_vec()))
            .into_tuple()
            .all(self.db)
            .await?;

        let mut sums: HashMap<i32, (i64, i64)> = HashMap::new();
        for (kos_id, rating) in rows {
            let entry = sums.entry(kos_id).or_insert((0, 0));
            entry.0 += i64::from(rating);
            entry.1 += 1;
        }

        Ok(sums
            .into_iter()
            .map(|(kos_id, (sum, count))| (kos_id, sum as f64 / count as f64))
            .collect())
    }

    /// Ids of every kos whose post belongs to `owner_id`, deleted listings included.
    pub async fn ids_owned_by(&self, owner_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::Kos::find()
            .select_only()
            .column(entity::kos::Column::Id)
            .inner_join(entity::prelude::Post)
            .filter(entity::post::Column::UserId.eq(owner_id))
            .into_tuple()
            .all(self.db)
            .await
    }

    /// Loads several kos by id, deleted listings included, keyed by id.
    pub async fn find_many(&self, ids: Vec<i32>) -> Result<HashMap<i32, Kos>, DbErr> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        Self::joined()
            .filter(entity::kos::Column::Id.is_in(ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|row| Self::merge(row).map(|kos| (kos.id, kos)))
            .collect()
    }

    /// Counts active listings.
    pub async fn count_active(&self) -> Result<u64, DbErr> {
        let query: Select<entity::kos::Entity> = entity::prelude::Kos::find()
            .inner_join(entity::prelude::Post)
            .filter(entity::post::Column::DeletedAt.is_null());

        query.count(self.db).await
    }
}
