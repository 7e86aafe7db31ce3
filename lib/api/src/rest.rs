use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer, Result as ActixResult};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use stylematch_core::{Directory, Error, Listing, ListingId, QuizAnswers, User, UserId};
use stylematch_similarity::Recommender;
use stylematch_storage::SocialStore;

/// Shared handler state
#[derive(Clone)]
pub struct ApiState {
    pub store: Arc<SocialStore>,
    pub recommender: Arc<Recommender>,
}

impl ApiState {
    pub fn new(store: Arc<SocialStore>, recommender: Arc<Recommender>) -> Self {
        Self { store, recommender }
    }
}

#[derive(Deserialize)]
struct CreateUserRequest {
    name: String,
    circle: String,
}

#[derive(Deserialize)]
struct CreateListingRequest {
    owner_id: UserId,
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default = "default_privacy")]
    privacy: String,
}

fn default_privacy() -> String {
    "public".to_string()
}

#[derive(Deserialize)]
struct PrivacyRequest {
    privacy: String,
}

#[derive(Deserialize)]
struct ListingTextRequest {
    title: String,
    #[serde(default)]
    description: String,
}

#[derive(Deserialize)]
struct PeopleQuery {
    k: Option<usize>,
    min_sim: Option<f32>,
    exclude_followed: Option<bool>,
}

#[derive(Deserialize)]
struct ListingsQuery {
    k: Option<usize>,
}

#[derive(Serialize)]
struct UserInfo {
    user_id: UserId,
    name: String,
    circle: String,
    owned_listing_ids: Vec<ListingId>,
    quiz_answers: QuizAnswers,
    following: Vec<UserId>,
}

impl UserInfo {
    fn from_user(user: User, following: Vec<UserId>) -> Self {
        Self {
            user_id: user.id,
            name: user.name,
            circle: user.circle,
            owned_listing_ids: user.owned_listing_ids,
            quiz_answers: user.quiz_answers,
            following,
        }
    }
}

#[derive(Serialize)]
struct ListingInfo {
    listing_id: ListingId,
    owner_id: UserId,
    title: String,
    description: String,
    privacy: String,
}

impl From<Listing> for ListingInfo {
    fn from(listing: Listing) -> Self {
        Self {
            listing_id: listing.id,
            owner_id: listing.owner_id,
            privacy: listing.privacy.to_string(),
            title: listing.title,
            description: listing.description,
        }
    }
}

#[derive(Serialize)]
struct PersonResult {
    user_id: UserId,
    name: String,
    score: f32,
}

#[derive(Serialize)]
struct ListingResult {
    listing_id: ListingId,
    title: String,
    owner_name: String,
    score: f32,
}

pub struct RestApi;

impl RestApi {
    pub async fn start(state: ApiState, port: u16) -> std::io::Result<()> {
        HttpServer::new(move || {
            let cors = Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .max_age(3600);

            App::new()
                .wrap(cors)
                .app_data(web::Data::new(state.clone()))
                .configure(configure)
        })
        .bind(("0.0.0.0", port))?
        .run()
        .await
    }
}

/// Register every route on `cfg`
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health))
        .route("/users", web::post().to(create_user))
        .route("/users/{id}", web::get().to(get_user))
        .route("/users/{id}/follow/{other}", web::put().to(follow))
        .route("/users/{id}/follow/{other}", web::delete().to(unfollow))
        .route("/users/{id}/style-quiz", web::post().to(take_style_quiz))
        .route("/users/{id}/listings/visible", web::get().to(visible_listings))
        .route("/users/{id}/suggestions/people", web::get().to(suggest_people))
        .route("/users/{id}/suggestions/listings", web::get().to(suggest_listings))
        .route("/listings", web::post().to(create_listing))
        .route("/listings/{id}", web::get().to(get_listing))
        .route("/listings/{id}", web::put().to(update_listing_text))
        .route("/listings/{id}/privacy", web::put().to(set_listing_privacy))
        .route("/vectors/quiz", web::post().to(quiz_vector))
        .route("/vectors/listing", web::post().to(listing_vector));
}

fn error_response(e: &Error) -> HttpResponse {
    let body = serde_json::json!({ "error": e.to_string() });
    if e.is_not_found() {
        HttpResponse::NotFound().json(body)
    } else {
        HttpResponse::BadRequest().json(body)
    }
}

fn ok_true() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "result": true }))
}

fn round4(score: f32) -> f32 {
    (score * 10_000.0).round() / 10_000.0
}

async fn health() -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "title": "stylematch",
        "version": env!("CARGO_PKG_VERSION"),
    })))
}

async fn create_user(
    state: web::Data<ApiState>,
    req: web::Json<CreateUserRequest>,
) -> ActixResult<HttpResponse> {
    match state.store.add_user(&req.name, &req.circle) {
        Ok(user_id) => Ok(HttpResponse::Ok().json(serde_json::json!({
            "result": { "user_id": user_id }
        }))),
        Err(e) => Ok(error_response(&e)),
    }
}

async fn get_user(
    state: web::Data<ApiState>,
    path: web::Path<UserId>,
) -> ActixResult<HttpResponse> {
    let user_id = path.into_inner();

    let snapshot = state.store.read();
    match snapshot.user(user_id) {
        Some(user) => {
            let following = snapshot.followees(user_id).collect();
            Ok(HttpResponse::Ok().json(serde_json::json!({
                "result": UserInfo::from_user(user.clone(), following)
            })))
        }
        None => Ok(error_response(&Error::UserNotFound(user_id))),
    }
}

async fn follow(
    state: web::Data<ApiState>,
    path: web::Path<(UserId, UserId)>,
) -> ActixResult<HttpResponse> {
    let (follower, followee) = path.into_inner();

    match state.store.follow(follower, followee) {
        Ok(()) => Ok(HttpResponse::Ok().json(serde_json::json!({
            "result": { "connected": state.store.is_connected(follower, followee) }
        }))),
        Err(e) => Ok(error_response(&e)),
    }
}

async fn unfollow(
    state: web::Data<ApiState>,
    path: web::Path<(UserId, UserId)>,
) -> ActixResult<HttpResponse> {
    let (follower, followee) = path.into_inner();
    state.store.unfollow(follower, followee);
    Ok(ok_true())
}

async fn take_style_quiz(
    state: web::Data<ApiState>,
    path: web::Path<UserId>,
    req: web::Json<QuizAnswers>,
) -> ActixResult<HttpResponse> {
    let user_id = path.into_inner();

    match state.store.take_style_quiz(user_id, &req) {
        Ok(()) => Ok(ok_true()),
        Err(e) => Ok(error_response(&e)),
    }
}

async fn visible_listings(
    state: web::Data<ApiState>,
    path: web::Path<UserId>,
) -> ActixResult<HttpResponse> {
    let user_id = path.into_inner();

    match state.store.visible_listings_for(user_id) {
        Ok(listings) => {
            let result: Vec<ListingInfo> = listings.into_iter().map(ListingInfo::from).collect();
            Ok(HttpResponse::Ok().json(serde_json::json!({ "result": result })))
        }
        Err(e) => Ok(error_response(&e)),
    }
}

async fn suggest_people(
    state: web::Data<ApiState>,
    path: web::Path<UserId>,
    query: web::Query<PeopleQuery>,
) -> ActixResult<HttpResponse> {
    let user_id = path.into_inner();
    let defaults = state.recommender.config();
    let k = query.k.unwrap_or(defaults.people_k);
    let min_sim = query.min_sim.unwrap_or(defaults.people_min_similarity);
    let exclude_followed = query.exclude_followed.unwrap_or(defaults.exclude_followed);
    if !min_sim.is_finite() {
        let e = Error::InvalidQuery(format!("min_sim must be finite, got {min_sim}"));
        return Ok(error_response(&e));
    }

    let snapshot = state.store.read();
    match state
        .recommender
        .suggest_people(&*snapshot, user_id, k, min_sim, exclude_followed)
    {
        Ok(people) => {
            tracing::debug!(user_id, k, hits = people.len(), "people suggestions");
            let result: Vec<PersonResult> = people
                .into_iter()
                .map(|p| PersonResult {
                    user_id: p.user_id,
                    name: p.name,
                    score: round4(p.score),
                })
                .collect();
            Ok(HttpResponse::Ok().json(serde_json::json!({ "result": result })))
        }
        Err(e) => Ok(error_response(&e)),
    }
}

async fn suggest_listings(
    state: web::Data<ApiState>,
    path: web::Path<UserId>,
    query: web::Query<ListingsQuery>,
) -> ActixResult<HttpResponse> {
    let user_id = path.into_inner();
    let k = query.k.unwrap_or(state.recommender.config().listings_k);

    let snapshot = state.store.read();
    match state.recommender.suggest_listings(&*snapshot, user_id, k) {
        Ok(listings) => {
            tracing::debug!(user_id, k, hits = listings.len(), "listing suggestions");
            let result: Vec<ListingResult> = listings
                .into_iter()
                .map(|l| ListingResult {
                    listing_id: l.listing_id,
                    title: l.title,
                    owner_name: l.owner_name,
                    score: round4(l.score),
                })
                .collect();
            Ok(HttpResponse::Ok().json(serde_json::json!({ "result": result })))
        }
        Err(e) => Ok(error_response(&e)),
    }
}

async fn create_listing(
    state: web::Data<ApiState>,
    req: web::Json<CreateListingRequest>,
) -> ActixResult<HttpResponse> {
    match state
        .store
        .add_listing(req.owner_id, &req.title, &req.description, &req.privacy)
    {
        Ok(listing_id) => Ok(HttpResponse::Ok().json(serde_json::json!({
            "result": { "listing_id": listing_id }
        }))),
        Err(e) => Ok(error_response(&e)),
    }
}

async fn get_listing(
    state: web::Data<ApiState>,
    path: web::Path<ListingId>,
) -> ActixResult<HttpResponse> {
    let listing_id = path.into_inner();

    match state.store.get_listing(listing_id) {
        Some(listing) => Ok(HttpResponse::Ok().json(serde_json::json!({
            "result": ListingInfo::from(listing)
        }))),
        None => Ok(error_response(&Error::ListingNotFound(listing_id))),
    }
}

async fn update_listing_text(
    state: web::Data<ApiState>,
    path: web::Path<ListingId>,
    req: web::Json<ListingTextRequest>,
) -> ActixResult<HttpResponse> {
    let listing_id = path.into_inner();

    match state
        .store
        .update_listing_text(listing_id, &req.title, &req.description)
    {
        Ok(()) => Ok(ok_true()),
        Err(e) => Ok(error_response(&e)),
    }
}

async fn set_listing_privacy(
    state: web::Data<ApiState>,
    path: web::Path<ListingId>,
    req: web::Json<PrivacyRequest>,
) -> ActixResult<HttpResponse> {
    let listing_id = path.into_inner();

    match state.store.set_listing_privacy(listing_id, &req.privacy) {
        Ok(()) => Ok(ok_true()),
        Err(e) => Ok(error_response(&e)),
    }
}

async fn quiz_vector(
    state: web::Data<ApiState>,
    req: web::Json<QuizAnswers>,
) -> ActixResult<HttpResponse> {
    let vector = state.recommender.compute_quiz_vector(&req);
    Ok(HttpResponse::Ok().json(serde_json::json!({ "result": vector.as_slice() })))
}

async fn listing_vector(
    state: web::Data<ApiState>,
    req: web::Json<ListingTextRequest>,
) -> ActixResult<HttpResponse> {
    let vector = state
        .recommender
        .compute_listing_vector(&req.title, &req.description);
    Ok(HttpResponse::Ok().json(serde_json::json!({ "result": vector.as_slice() })))
}
