use crate::data::TransferData;
use crate::error::{MapError, MapResult};
use crate::map::{
    FeatureGroup, MarkerAction, MarkerEvent, MarkerInteractions, MarkerTarget, RenderPlan, View,
    ViewButtons, ViewRequest,
};
use crate::reconcile::{ReconcileOptions, Reconciler};
use log::info;
use std::sync::Arc;

/// Interactive selection over the loaded data.
///
/// Every change re-runs the reconciler and redraws the overlay. A change
/// that fails to reconcile leaves both the selection and the overlay untouched.
pub struct MapSession {
    data: Arc<TransferData>,
    options: ReconcileOptions,
    selection: ViewRequest,
    overlay: FeatureGroup,
}

impl MapSession {
    pub fn new(data: Arc<TransferData>, options: ReconcileOptions) -> MapResult<Self> {
        let season = data
            .default_season()
            .map(|s| s.id.clone())
            .ok_or_else(|| MapError::NotFound("No seasons loaded".to_string()))?;

        Ok(MapSession {
            data,
            options,
            selection: ViewRequest::new(season, View::Left),
            overlay: FeatureGroup::new(),
        })
    }

    pub fn selection(&self) -> &ViewRequest {
        &self.selection
    }

    pub fn buttons(&self) -> ViewButtons {
        self.selection.view.buttons()
    }

    pub fn overlay(&self) -> &FeatureGroup {
        &self.overlay
    }

    pub fn data(&self) -> &TransferData {
        &self.data
    }

    pub fn render(&mut self) -> MapResult<RenderPlan> {
        self.apply(self.selection.clone())
    }

    pub fn select_season(&mut self, season: &str) -> MapResult<RenderPlan> {
        self.apply(ViewRequest::new(season, self.selection.view.clone()))
    }

    pub fn select_view(&mut self, view: View) -> MapResult<RenderPlan> {
        self.apply(ViewRequest::new(self.selection.season.clone(), view))
    }

    /// "transfers out" button
    pub fn show_transfers_out(&mut self) -> MapResult<RenderPlan> {
        self.select_view(View::Left)
    }

    /// "transfers in" button
    pub fn show_transfers_in(&mut self) -> MapResult<RenderPlan> {
        self.select_view(View::Joined)
    }

    /// Dispatches an interaction with a currently drawn marker
    pub fn handle(&mut self, event: &MarkerEvent) -> MapResult<MarkerAction> {
        let action = match &event.target {
            MarkerTarget::Club(id) => self
                .overlay
                .club_marker(id)
                .map(|marker| marker.handle(&event.kind)),
            MarkerTarget::Player(name) => self
                .overlay
                .player_marker(name)
                .map(|marker| marker.handle(&event.kind)),
        }
        .ok_or_else(|| MapError::NotFound(format!("Marker {:?} is not on the map", event.target)))?;

        if let MarkerAction::SelectView(view) = &action {
            self.select_view(view.clone())?;
        }

        Ok(action)
    }

    fn apply(&mut self, request: ViewRequest) -> MapResult<RenderPlan> {
        let plan = Reconciler::reconcile(&self.data, &request, &self.options)?;

        if request != self.selection {
            info!("selection changed: season {} view {:?}", request.season, request.view);
        }

        plan.apply(&mut self.overlay);
        self.selection = request;

        Ok(plan)
    }
}
