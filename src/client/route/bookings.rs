use dioxus::prelude::*;

use crate::{
    client::{
        component::{Page, Pagination, Price},
        constant::SITE_NAME,
        model::{auth::UserState, error::ApiError},
        router::Route,
    },
    model::{
        api::PaginatedDto,
        booking::{BookingDto, BookingStatus},
    },
};

#[cfg(feature = "web")]
use crate::client::api::booking::{get_bookings, update_booking_status};
#[cfg(feature = "web")]
use dioxus_logger::tracing;

const BOOKINGS_PER_PAGE: u64 = 10;

fn status_badge(status: BookingStatus) -> &'static str {
    match status {
        BookingStatus::Pending => "badge-warning",
        BookingStatus::Confirmed => "badge-info",
        BookingStatus::Cancelled => "badge-ghost",
        BookingStatus::Completed => "badge-success",
    }
}

/// Transitions offered as buttons. The server re-checks every one of them.
fn available_actions(state: &UserState, booking: &BookingDto) -> Vec<BookingStatus> {
    let is_renter = state.user_id() == Some(booking.renter.id);

    match booking.status {
        BookingStatus::Pending if state.can_sell() && !is_renter => {
            vec![BookingStatus::Confirmed, BookingStatus::Cancelled]
        }
        BookingStatus::Pending if is_renter => vec![BookingStatus::Cancelled],
        BookingStatus::Confirmed if state.is_admin() => {
            vec![BookingStatus::Completed, BookingStatus::Cancelled]
        }
        BookingStatus::Confirmed if state.can_sell() && !is_renter => {
            vec![BookingStatus::Cancelled]
        }
        _ => Vec::new(),
    }
}

fn action_label(status: BookingStatus) -> &'static str {
    match status {
        BookingStatus::Confirmed => "Confirm",
        BookingStatus::Cancelled => "Cancel",
        BookingStatus::Completed => "Complete",
        BookingStatus::Pending => "Reopen",
    }
}

#[component]
pub fn Bookings() -> Element {
    let user_state = use_context::<Signal<UserState>>();
    let mut status_filter = use_signal(|| None::<BookingStatus>);
    let mut page = use_signal(|| 1u64);
    let refetch_trigger = use_signal(|| 0u32);
    #[allow(unused_mut)]
    let mut bookings = use_signal(|| None::<Result<PaginatedDto<BookingDto>, ApiError>>);

    #[cfg(feature = "web")]
    let future = use_resource(move || async move {
        let _ = refetch_trigger();
        get_bookings(page(), BOOKINGS_PER_PAGE, status_filter()).await
    });

    #[cfg(feature = "web")]
    use_effect(move || match &*future.read_unchecked() {
        Some(Ok(data)) => bookings.set(Some(Ok(data.clone()))),
        Some(Err(err)) => {
            tracing::error!("Failed to fetch bookings: {}", err);
            bookings.set(Some(Err(err.clone())));
        }
        None => (),
    });

    let heading = if user_state().can_sell() {
        "Bookings"
    } else {
        "My bookings"
    };

    rsx! {
        Title { "Bookings | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center",
            div {
                class: "w-full max-w-5xl flex flex-col gap-4",
                div {
                    class: "flex justify-between items-center",
                    h1 { class: "text-2xl font-bold", "{heading}" }
                    select {
                        class: "select select-bordered select-sm",
                        onchange: move |evt| {
                            status_filter.set(BookingStatus::parse(&evt.value()));
                            page.set(1);
                        },
                        option { value: "", "All statuses" }
                        for status in BookingStatus::ALL {
                            option { value: "{status.as_str()}", "{status}" }
                        }
                    }
                }
                match bookings() {
                    Some(Ok(data)) => rsx! {
                        if data.items.is_empty() {
                            div { class: "text-center py-16 opacity-50", "No bookings yet" }
                        } else {
                            div {
                                class: "overflow-x-auto",
                                table {
                                    class: "table table-zebra w-full",
                                    thead {
                                        tr {
                                            th { "Kos" }
                                            th { "Renter" }
                                            th { "Dates" }
                                            th { "Total" }
                                            th { "Status" }
                                            th { class: "text-right", "Actions" }
                                        }
                                    }
                                    tbody {
                                        for booking in data.items.iter().cloned() {
                                            BookingRow { key: "{booking.id}", booking, refetch_trigger }
                                        }
                                    }
                                }
                            }
                            Pagination { page, total: data.total, total_pages: data.total_pages }
                        }
                    },
                    Some(Err(err)) => rsx! {
                        div { class: "alert alert-error", "{err.message}" }
                    },
                    None => rsx! {
                        div {
                            class: "flex justify-center py-16",
                            span { class: "loading loading-spinner loading-lg" }
                        }
                    },
                }
            }
        }
    }
}

#[component]
fn BookingRow(booking: BookingDto, refetch_trigger: Signal<u32>) -> Element {
    let user_state = use_context::<Signal<UserState>>();
    #[allow(unused_mut)]
    let mut error = use_signal(|| None::<String>);
    #[allow(unused_mut)]
    let mut is_updating = use_signal(|| false);

    let actions = available_actions(&user_state(), &booking);
    let booking_id = booking.id;

    rsx! {
        tr {
            td {
                Link { to: Route::KosDetail { id: booking.kos_id }, class: "link", "{booking.kos_title}" }
                div { class: "text-xs opacity-60", "{booking.kos_city}" }
            }
            td {
                "{booking.renter.name}"
                if let Some(contact) = &booking.renter.contact {
                    div { class: "text-xs opacity-60", "{contact}" }
                }
            }
            td {
                "{booking.check_in_date} → {booking.check_out_date}"
                div { class: "text-xs opacity-60", "{booking.duration_months} months" }
            }
            td { Price { amount: booking.total_price } }
            td { span { class: "badge {status_badge(booking.status)}", "{booking.status}" } }
            td {
                div {
                    class: "flex gap-2 justify-end",
                    for action in actions {
                        button {
                            key: "{action}",
                            class: if action == BookingStatus::Cancelled { "btn btn-xs btn-outline btn-error" } else { "btn btn-xs btn-primary" },
                            disabled: is_updating(),
                            onclick: move |_| {
                                #[cfg(feature = "web")]
                                {
                                    let mut refetch_trigger = refetch_trigger;
                                    spawn(async move {
                                        is_updating.set(true);
                                        match update_booking_status(booking_id, action).await {
                                            Ok(_) => {
                                                error.set(None);
                                                refetch_trigger.set(refetch_trigger() + 1);
                                            }
                                            Err(err) => error.set(Some(err.message)),
                                        }
                                        is_updating.set(false);
                                    });
                                }
                                #[cfg(not(feature = "web"))]
                                let _ = (booking_id, action);
                            },
                            "{action_label(action)}"
                        }
                    }
                }
                if let Some(message) = error() {
                    div { class: "text-xs text-error text-right", "{message}" }
                }
            }
        }
    }
}
