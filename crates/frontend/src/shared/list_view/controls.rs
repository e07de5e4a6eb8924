//! Event wiring shared by every list page: each handler runs one reducer
//! on the page's `ViewState` signal.

use super::page_info::{PageInfo, PageMove};
use super::spec::ListSpec;
use super::state::ViewState;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct ListControls {
    pub state: RwSignal<ViewState>,
    pub spec: &'static ListSpec,
}

impl ListControls {
    pub fn new(state: RwSignal<ViewState>, spec: &'static ListSpec) -> Self {
        Self { state, spec }
    }

    /// Column header click.
    pub fn on_sort(self) -> Callback<String> {
        Callback::new(move |field: String| {
            self.state
                .maybe_update(|s| s.sort_by_header(self.spec, &field));
        })
    }

    pub fn on_page(self) -> Callback<PageMove> {
        Callback::new(move |movement: PageMove| {
            self.state.maybe_update(|s| s.change_page(movement));
        })
    }

    pub fn on_page_size(self) -> Callback<usize> {
        Callback::new(move |size: usize| {
            self.state.maybe_update(|s| s.set_page_size(self.spec, size));
        })
    }

    /// Single-valued filter (text, select, number, date); blank clears it.
    pub fn on_filter(self, key: &'static str) -> Callback<String> {
        Callback::new(move |value: String| {
            self.state
                .maybe_update(|s| s.set_filter(self.spec, key, &[value]));
        })
    }

    /// Multi-valued filter (`store_ids=1&store_ids=2`).
    pub fn on_multi_filter(self, key: &'static str) -> Callback<Vec<String>> {
        Callback::new(move |values: Vec<String>| {
            self.state
                .maybe_update(|s| s.set_filter(self.spec, key, &values));
        })
    }

    pub fn on_clear_filters(self) -> Callback<()> {
        Callback::new(move |_| {
            self.state.maybe_update(|s| s.clear_filters());
        })
    }

    pub fn set_total_count(self, total_count: usize) {
        self.state.maybe_update(|s| s.set_total_count(total_count));
    }

    pub fn sort_field(self) -> Signal<String> {
        Signal::derive(move || self.state.with(|s| s.sort_field.clone()))
    }

    pub fn sort_ascending(self) -> Signal<bool> {
        Signal::derive(move || self.state.with(|s| s.sort_order.is_ascending()))
    }

    pub fn page_info(self) -> Signal<PageInfo> {
        Signal::derive(move || self.state.with(|s| s.page_info()))
    }

    /// Current value of a filter as form text. Memoized: paging, sorting
    /// or a new `total_count` do not notify inputs bound to it.
    pub fn input_value(self, key: &'static str) -> Memo<String> {
        Memo::new(move |_| self.state.with(|s| s.input_value(key)))
    }

    pub fn list_value(self, key: &'static str) -> Signal<Vec<String>> {
        Signal::derive(move || self.state.with(|s| s.list(key)))
    }

    pub fn active_filter_count(self) -> Signal<usize> {
        Signal::derive(move || self.state.with(|s| s.active_filter_count()))
    }

    /// Backend query of the current state; only changes when a request
    /// parameter does, so it can drive refetching directly.
    pub fn backend_query(self) -> Memo<String> {
        Memo::new(move |_| self.state.with(|s| s.backend_query(self.spec)))
    }
}
