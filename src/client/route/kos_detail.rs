use chrono::{Local, NaiveDate};
use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::{
        fa_regular_icons::FaHeart as FaHeartOutline,
        fa_solid_icons::{FaEye, FaHeart, FaLocationDot, FaStar},
    },
    Icon,
};

use crate::{
    client::{
        component::{
            page::{ErrorPage, LoadingPage},
            Markdown, Page, Pagination, Price,
        },
        constant::SITE_NAME,
        model::{auth::UserState, error::ApiError},
        router::Route,
    },
    model::{
        api::PaginatedDto,
        booking::{MAX_DURATION_MONTHS, MIN_DURATION_MONTHS},
        kos::KosDetailDto,
        review::ReviewDto,
    },
};

#[cfg(feature = "web")]
use crate::{
    client::api::{
        booking::create_booking,
        favorite::{add_favorite, remove_favorite},
        kos::get_kos,
        review::{create_review, get_reviews},
    },
    model::{booking::CreateBookingDto, review::CreateReviewDto},
};
#[cfg(feature = "web")]
use dioxus_logger::tracing;

const REVIEWS_PER_PAGE: u64 = 5;

#[component]
pub fn KosDetail(id: i32) -> Element {
    #[allow(unused_mut)]
    let mut detail = use_signal(|| None::<Result<KosDetailDto, ApiError>>);
    let refetch_trigger = use_signal(|| 0u32);

    #[cfg(feature = "web")]
    let future = use_resource(move || async move {
        let _ = refetch_trigger();
        get_kos(id).await
    });

    #[cfg(feature = "web")]
    use_effect(move || match &*future.read_unchecked() {
        Some(Ok(data)) => detail.set(Some(Ok(data.clone()))),
        Some(Err(err)) => {
            tracing::error!("Failed to fetch kos {}: {}", id, err);
            detail.set(Some(Err(err.clone())));
        }
        None => (),
    });

    match detail() {
        Some(Ok(data)) => rsx! {
            Title { "{data.kos.title} | {SITE_NAME}" }
            Page {
                class: "flex flex-col items-center",
                div {
                    class: "w-full max-w-5xl grid grid-cols-1 lg:grid-cols-3 gap-6",
                    div {
                        class: "lg:col-span-2 flex flex-col gap-6",
                        PhotoGallery { detail: data.clone() }
                        KosInfo { detail: data.clone(), refetch_trigger }
                        ReviewSection { kos_id: id, owner_id: data.kos.owner.id, refetch_trigger }
                    }
                    div {
                        BookingForm {
                            kos_id: id,
                            owner_id: data.kos.owner.id,
                            monthly_price: data.kos.price,
                            available_rooms: data.kos.available_rooms,
                        }
                    }
                }
            }
        },
        Some(Err(err)) => rsx! {
            ErrorPage { status: err.status, message: err.message }
        },
        None => rsx! {
            LoadingPage {}
        },
    }
}

#[component]
fn PhotoGallery(detail: KosDetailDto) -> Element {
    let mut selected = use_signal(|| 0usize);
    let photos = detail.photos;

    if photos.is_empty() {
        return rsx! {
            div {
                class: "h-72 rounded-box bg-base-300 flex items-center justify-center opacity-50",
                "No photos yet"
            }
        };
    }

    let current = photos
        .get(selected())
        .or_else(|| photos.first())
        .map(|p| p.url.clone())
        .unwrap_or_default();

    rsx! {
        div {
            class: "flex flex-col gap-2",
            img {
                class: "rounded-box w-full h-80 object-cover",
                src: "{current}",
                alt: "{detail.kos.title}",
            }
            if photos.len() > 1 {
                div {
                    class: "flex gap-2 overflow-x-auto",
                    for (index, photo) in photos.iter().enumerate() {
                        button {
                            key: "{photo.id}",
                            class: if index == selected() { "ring ring-primary rounded" } else { "opacity-70 rounded" },
                            onclick: move |_| selected.set(index),
                            img {
                                class: "w-24 h-16 object-cover rounded",
                                src: "{photo.thumbnail_url}",
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn KosInfo(detail: KosDetailDto, refetch_trigger: Signal<u32>) -> Element {
    let kos = detail.kos;

    rsx! {
        div {
            class: "flex flex-col gap-3",
            div {
                class: "flex justify-between items-start gap-4",
                div {
                    h1 { class: "text-2xl font-bold", "{kos.title}" }
                    p {
                        class: "flex items-center gap-1 opacity-70",
                        Icon { width: 14, height: 14, icon: FaLocationDot }
                        "{kos.address}, {kos.city}"
                    }
                }
                FavoriteButton {
                    kos_id: kos.id,
                    owner_id: kos.owner.id,
                    is_favorited: detail.is_favorited,
                    refetch_trigger,
                }
            }
            div {
                class: "flex flex-wrap gap-2 items-center",
                span { class: "badge badge-outline", "{kos.kos_type.label()}" }
                span { class: "badge", "{kos.available_rooms} of {kos.total_rooms} rooms free" }
                span {
                    class: "flex items-center gap-1 text-sm opacity-70",
                    Icon { width: 12, height: 12, icon: FaEye }
                    "{kos.view_count}"
                }
                span {
                    class: "flex items-center gap-1 text-sm opacity-70",
                    Icon { width: 12, height: 12, icon: FaStar }
                    "{kos.average_rating:.1} ({kos.review_count} reviews)"
                }
            }
            Price { amount: kos.price, suffix: " / month" }
            if let Some(description) = kos.description.filter(|d| !d.trim().is_empty()) {
                Markdown { source: description }
            } else {
                span { class: "opacity-50 italic", "No description provided" }
            }
            if let Some(facilities) = kos.facilities.filter(|f| !f.trim().is_empty()) {
                div {
                    h3 { class: "font-semibold", "Facilities" }
                    div {
                        class: "flex flex-wrap gap-2 mt-1",
                        for facility in facilities.split(',').map(str::trim).filter(|f| !f.is_empty()) {
                            span { class: "badge badge-ghost", "{facility}" }
                        }
                    }
                }
            }
            div {
                class: "text-sm opacity-70",
                "Owner: {kos.owner.name}"
                if let Some(contact) = kos.owner.contact {
                    " · {contact}"
                }
            }
        }
    }
}

#[component]
fn FavoriteButton(
    kos_id: i32,
    owner_id: i32,
    is_favorited: bool,
    refetch_trigger: Signal<u32>,
) -> Element {
    let user_state = use_context::<Signal<UserState>>();
    #[allow(unused_mut)]
    let mut is_saving = use_signal(|| false);

    let state = user_state();
    if !state.is_logged_in() || state.user_id() == Some(owner_id) {
        return rsx!();
    }

    let on_toggle = move |_: MouseEvent| {
        #[cfg(feature = "web")]
        {
            let mut refetch_trigger = refetch_trigger;
            spawn(async move {
                is_saving.set(true);
                let result = if is_favorited {
                    remove_favorite(kos_id).await
                } else {
                    add_favorite(kos_id).await.map(|_| ())
                };
                if let Err(err) = result {
                    tracing::error!("Failed to update favorite: {}", err);
                }
                is_saving.set(false);
                refetch_trigger.set(refetch_trigger() + 1);
            });
        }
    };

    rsx! {
        button {
            class: "btn btn-ghost btn-circle",
            disabled: is_saving(),
            onclick: on_toggle,
            if is_favorited {
                Icon { width: 22, height: 22, icon: FaHeart, class: "text-error" }
            } else {
                Icon { width: 22, height: 22, icon: FaHeartOutline }
            }
        }
    }
}

/// Check-out is the same day-of-month `months` later, clamped to the month end.
fn check_out_preview(check_in: NaiveDate, months: u32) -> Option<NaiveDate> {
    check_in.checked_add_months(chrono::Months::new(months))
}

#[component]
fn BookingForm(kos_id: i32, owner_id: i32, monthly_price: i64, available_rooms: i32) -> Element {
    let user_state = use_context::<Signal<UserState>>();
    #[allow(unused_variables)]
    let nav = navigator();

    let today = Local::now().date_naive();
    let mut check_in = use_signal(move || today.format("%Y-%m-%d").to_string());
    let mut months = use_signal(|| MIN_DURATION_MONTHS);
    let mut notes = use_signal(String::new);
    #[allow(unused_mut)]
    let mut error = use_signal(|| None::<String>);
    #[allow(unused_mut)]
    let mut is_submitting = use_signal(|| false);

    let state = user_state();
    let parsed_check_in = NaiveDate::parse_from_str(&check_in(), "%Y-%m-%d").ok();
    let check_out = parsed_check_in.and_then(|date| check_out_preview(date, months()));
    let total = monthly_price * i64::from(months());

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(check_in_date) = parsed_check_in else {
            error.set(Some("Choose a valid check-in date".to_string()));
            return;
        };

        #[cfg(feature = "web")]
        spawn(async move {
            is_submitting.set(true);
            let notes = notes();
            let payload = CreateBookingDto {
                kos_id,
                check_in_date,
                duration_months: months(),
                notes: (!notes.trim().is_empty()).then_some(notes),
            };
            match create_booking(payload).await {
                Ok(_) => {
                    nav.push(Route::Bookings {});
                }
                Err(err) => error.set(Some(err.message)),
            }
            is_submitting.set(false);
        });

        #[cfg(not(feature = "web"))]
        let _ = check_in_date;
    };

    rsx! {
        div {
            class: "card bg-base-200 sticky top-24",
            div {
                class: "card-body gap-3",
                h2 { class: "card-title", "Book this kos" }
                if !state.is_logged_in() {
                    p { class: "opacity-70", "Log in to book a room." }
                    Link { to: Route::Login {}, class: "btn btn-primary", "Login" }
                } else if state.user_id() == Some(owner_id) {
                    p { class: "opacity-70", "This is your listing." }
                } else if available_rooms <= 0 {
                    p { class: "opacity-70", "No rooms are available right now." }
                } else {
                    form {
                        class: "flex flex-col gap-3",
                        onsubmit: on_submit,
                        label {
                            class: "form-control",
                            span { class: "label-text", "Check-in" }
                            input {
                                class: "input input-bordered",
                                r#type: "date",
                                min: "{today}",
                                value: "{check_in()}",
                                oninput: move |evt| check_in.set(evt.value()),
                            }
                        }
                        label {
                            class: "form-control",
                            span { class: "label-text", "Duration (months)" }
                            input {
                                class: "input input-bordered",
                                r#type: "number",
                                min: "{MIN_DURATION_MONTHS}",
                                max: "{MAX_DURATION_MONTHS}",
                                value: "{months()}",
                                oninput: move |evt| {
                                    if let Ok(value) = evt.value().parse::<u32>() {
                                        months.set(value.clamp(MIN_DURATION_MONTHS, MAX_DURATION_MONTHS));
                                    }
                                },
                            }
                        }
                        label {
                            class: "form-control",
                            span { class: "label-text", "Notes" }
                            textarea {
                                class: "textarea textarea-bordered",
                                maxlength: "500",
                                value: "{notes()}",
                                oninput: move |evt| notes.set(evt.value()),
                            }
                        }
                        if let Some(check_out) = check_out {
                            p { class: "text-sm opacity-70", "Check-out: {check_out}" }
                        }
                        div {
                            class: "flex justify-between",
                            span { "Total" }
                            Price { amount: total }
                        }
                        if let Some(message) = error() {
                            div { class: "alert alert-error text-sm", "{message}" }
                        }
                        button {
                            r#type: "submit",
                            class: "btn btn-primary",
                            disabled: is_submitting(),
                            "Request booking"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ReviewSection(kos_id: i32, owner_id: i32, refetch_trigger: Signal<u32>) -> Element {
    let user_state = use_context::<Signal<UserState>>();
    let page = use_signal(|| 1u64);
    #[allow(unused_mut)]
    let mut reviews = use_signal(|| None::<Result<PaginatedDto<ReviewDto>, ApiError>>);

    #[cfg(feature = "web")]
    let future = use_resource(move || async move {
        let _ = refetch_trigger();
        get_reviews(kos_id, page(), REVIEWS_PER_PAGE).await
    });

    #[cfg(feature = "web")]
    use_effect(move || match &*future.read_unchecked() {
        Some(Ok(data)) => reviews.set(Some(Ok(data.clone()))),
        Some(Err(err)) => {
            tracing::error!("Failed to fetch reviews: {}", err);
            reviews.set(Some(Err(err.clone())));
        }
        None => (),
    });

    let state = user_state();
    let can_review = state.is_logged_in() && state.user_id() != Some(owner_id);

    rsx! {
        div {
            class: "flex flex-col gap-3",
            h2 { class: "text-xl font-semibold", "Reviews" }
            if can_review {
                ReviewForm { kos_id, refetch_trigger }
            }
            match reviews() {
                Some(Ok(data)) => rsx! {
                    if data.items.is_empty() {
                        p { class: "opacity-50", "No reviews yet" }
                    }
                    for review in data.items.iter().cloned() {
                        ReviewCard { key: "{review.id}", review }
                    }
                    Pagination { page, total: data.total, total_pages: data.total_pages }
                },
                Some(Err(err)) => rsx! {
                    div { class: "alert alert-error", "{err.message}" }
                },
                None => rsx! {
                    span { class: "loading loading-spinner" }
                },
            }
        }
    }
}

#[component]
fn ReviewCard(review: ReviewDto) -> Element {
    let stars = "★".repeat(review.rating.clamp(0, 5) as usize);
    let posted = review.created_at.format("%d %b %Y").to_string();

    rsx! {
        div {
            class: "card bg-base-200",
            div {
                class: "card-body p-4 gap-1",
                div {
                    class: "flex justify-between",
                    span { class: "font-semibold", "{review.user.name}" }
                    span { class: "text-warning", "{stars}" }
                }
                if let Some(comment) = &review.comment {
                    p { "{comment}" }
                }
                span { class: "text-xs opacity-50", "{posted}" }
            }
        }
    }
}

#[component]
fn ReviewForm(kos_id: i32, refetch_trigger: Signal<u32>) -> Element {
    let mut rating = use_signal(|| 5i32);
    let mut comment = use_signal(String::new);
    #[allow(unused_mut)]
    let mut error = use_signal(|| None::<String>);
    #[allow(unused_mut)]
    let mut posted = use_signal(|| false);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();

        #[cfg(feature = "web")]
        {
            let mut refetch_trigger = refetch_trigger;
            spawn(async move {
                let text = comment();
                let payload = CreateReviewDto {
                    rating: rating(),
                    comment: (!text.trim().is_empty()).then_some(text),
                };
                match create_review(kos_id, payload).await {
                    Ok(_) => {
                        comment.set(String::new());
                        error.set(None);
                        refetch_trigger.set(refetch_trigger() + 1);
                        posted.set(true);
                        gloo_timers::future::TimeoutFuture::new(3_000).await;
                        posted.set(false);
                    }
                    Err(err) => error.set(Some(err.message)),
                }
            });
        }
    };

    rsx! {
        form {
            class: "card bg-base-200 p-4 flex flex-col gap-2",
            onsubmit: on_submit,
            div {
                class: "flex items-center gap-2",
                span { "Rating" }
                select {
                    class: "select select-bordered select-sm",
                    onchange: move |evt| {
                        if let Ok(value) = evt.value().parse::<i32>() {
                            rating.set(value);
                        }
                    },
                    for value in (1..=5).rev() {
                        option { value: "{value}", selected: rating() == value, "{value}" }
                    }
                }
            }
            textarea {
                class: "textarea textarea-bordered",
                placeholder: "Share your experience",
                maxlength: "1000",
                value: "{comment()}",
                oninput: move |evt| comment.set(evt.value()),
            }
            if let Some(message) = error() {
                div { class: "alert alert-error text-sm", "{message}" }
            }
            if posted() {
                div { class: "alert alert-success text-sm", "Thanks, your review is posted" }
            }
            button { r#type: "submit", class: "btn btn-sm btn-primary self-end", "Post review" }
        }
    }
}
