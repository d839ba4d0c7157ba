/*!
 * Virtual target picking.
 *
 * The picker is driven explicitly by its caller: start picking on a body, feed it one pointer ray
 * per input event, then confirm or cancel. The body is passed in on every call.
 */

mod proc_errors;

use serde::{Serialize, Deserialize};
use strum::Display;
use tracing::{debug, info};

use crate::body::{Body, GlobalLocation};
use crate::coordinates::Coordinates;
use crate::geo_3d::{Point, Ray};
use crate::surface::SurfaceQuery;

pub use proc_errors::{
    PickingError,
    ProcResult,
};

/// State of the virtual targeting system.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Display)]
pub enum SystemState {
    /// No virtual target has been selected.
    NoTargetSelected,
    /// A virtual target has been selected.
    TargetSelected,
    /// A virtual target is currently being picked.
    PickingTarget,
}

/// Picking state machine.
/// Holds the virtual target's location, which doubles as the preview while picking.
#[derive(Debug, Clone)]
pub struct TargetPicker {
    location: GlobalLocation,
    state: SystemState,
    pointer_over_body: bool,
}
impl TargetPicker {
    /// Create a picker with no target, parked at `(0, 0)` on the given body.
    pub fn new(body: &Body) -> Self {
        TargetPicker{
            location: GlobalLocation::on_surface(body, Coordinates::default()),
            state: SystemState::NoTargetSelected,
            pointer_over_body: false,
        }
    }

    /// Get the current state.
    pub fn state(&self) -> SystemState {
        self.state
    }

    /// Get the stored location (the preview while picking).
    pub fn location(&self) -> &GlobalLocation {
        &self.location
    }

    /// Get the selected target, if any.
    pub fn target(&self) -> Option<&GlobalLocation> {
        match self.state {
            SystemState::TargetSelected => Some(&self.location),
            _ => None,
        }
    }

    /// Whether the last pointer update hit the body's surface.
    pub fn is_pointer_over_body(&self) -> bool {
        self.state == SystemState::PickingTarget && self.pointer_over_body
    }

    /// Start picking on a body.
    /// Does nothing if already picking; fails if the body has no surface.
    pub fn start_picking(&mut self, body: &Body) -> ProcResult<()> {
        if self.state == SystemState::PickingTarget {
            return Ok(());
        }
        if !body.has_surface {
            return Err(PickingError::NoSurface(body.name.clone()));
        }

        self.location = GlobalLocation::on_surface(body, Coordinates::default());
        self.pointer_over_body = false;
        self.transition(SystemState::PickingTarget);
        Ok(())
    }

    /// Feed one pointer ray while picking.
    /// Picking is cancelled if the body is no longer the one being picked on.
    /// Returns the surface query for the ray, `NotFound` when not picking.
    pub fn update(&mut self, body: &Body, ray: &Ray) -> SurfaceQuery {
        if self.state != SystemState::PickingTarget {
            return SurfaceQuery::NotFound;
        }
        if body.name != self.location.body {
            debug!(picking = %self.location.body, current = %body.name, "Body changed while picking");
            self.cancel();
            return SurfaceQuery::NotFound;
        }

        let query = body.mouse_coordinates(ray);
        match query {
            SurfaceQuery::Found(coordinates) => {
                self.location = GlobalLocation::on_surface(body, coordinates);
                self.pointer_over_body = true;
            },
            SurfaceQuery::NotFound => {
                self.pointer_over_body = false;
            },
        }
        query
    }

    /// Keep the previewed location as the target.
    /// Only a location under the pointer can be confirmed: returns `None`, and keeps picking,
    /// if the last update missed the surface. Returns `None` if not picking.
    pub fn confirm(&mut self) -> Option<&GlobalLocation> {
        if self.state != SystemState::PickingTarget {
            return None;
        }
        if !self.pointer_over_body {
            debug!("Pointer is off the surface, nothing to confirm");
            return None;
        }
        self.stop_picking(true);
        info!(coordinates = %self.location.coordinates, body = %self.location.body, "Virtual target selected");
        self.target()
    }

    /// Stop picking and drop the previewed location.
    pub fn cancel(&mut self) {
        if self.state == SystemState::PickingTarget {
            self.stop_picking(false);
        }
    }

    /// Set the target directly (e.g. from typed coordinates), cancelling any picking.
    pub fn set_target_location(&mut self, location: GlobalLocation) {
        self.cancel();
        self.location = location;
        self.transition(SystemState::TargetSelected);
    }

    /// Delete the target, parking the location at `(0, 0)` on the given body.
    pub fn delete_target(&mut self, body: &Body) {
        self.cancel();
        self.location = GlobalLocation::on_surface(body, Coordinates::default());
        self.transition(SystemState::NoTargetSelected);
    }

    /// Straight-line distance from a body-local position to the target.
    /// `None` if no target is selected or the target is on another body.
    pub fn distance_from(&self, body: &Body, position: &Point) -> Option<f64> {
        let target = self.target()?;
        if target.body != body.name {
            return None;
        }
        Some(target.position(body).distance(position))
    }

    fn stop_picking(&mut self, keep_target: bool) {
        self.pointer_over_body = false;
        self.transition(if keep_target { SystemState::TargetSelected } else { SystemState::NoTargetSelected });
    }

    fn transition(&mut self, state: SystemState) {
        if self.state != state {
            debug!(from = %self.state, to = %state, "Picking state change");
        }
        self.state = state;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::TerrainChoice;
    use crate::geo_3d::GeoVector;

    fn kerbin() -> Body {
        Body::example(TerrainChoice::default())
    }

    fn ray_toward(coordinates: Coordinates) -> Ray {
        let normal = coordinates.surface_normal();
        Ray::new(Point::from(normal * 2e6), -normal).unwrap()
    }

    fn missing_ray() -> Ray {
        Ray::new(Point::new(2e6, 2e6, 0.0), -GeoVector::xhat()).unwrap()
    }

    #[test]
    fn pick_and_confirm() {
        let body = kerbin();
        let mut picker = TargetPicker::new(&body);
        assert_eq!(picker.state(), SystemState::NoTargetSelected);
        assert!(picker.target().is_none());

        picker.start_picking(&body).unwrap();
        assert_eq!(picker.state(), SystemState::PickingTarget);

        let query = picker.update(&body, &ray_toward(Coordinates::new(-5.0, 74.0)));
        assert!(query.is_found());
        assert!(picker.is_pointer_over_body());

        let target = picker.confirm().unwrap();
        assert!((target.coordinates.latitude + 5.0).abs() < 1e-6);
        assert!((target.coordinates.longitude - 74.0).abs() < 1e-6);
        assert_eq!(picker.state(), SystemState::TargetSelected);
        assert!(!picker.is_pointer_over_body());
    }

    #[test]
    fn miss_keeps_preview() {
        let body = kerbin();
        let mut picker = TargetPicker::new(&body);
        picker.start_picking(&body).unwrap();
        picker.update(&body, &ray_toward(Coordinates::new(10.0, 20.0)));
        let preview = picker.location().clone();

        assert_eq!(picker.update(&body, &missing_ray()), SurfaceQuery::NotFound);
        assert!(!picker.is_pointer_over_body());
        assert_eq!(picker.location(), &preview);
    }

    #[test]
    fn confirm_needs_pointer_on_surface() {
        let body = kerbin();
        let mut picker = TargetPicker::new(&body);
        picker.start_picking(&body).unwrap();

        // Nothing hit yet
        assert!(picker.confirm().is_none());
        assert_eq!(picker.state(), SystemState::PickingTarget);

        picker.update(&body, &missing_ray());
        assert!(picker.confirm().is_none());
        assert_eq!(picker.state(), SystemState::PickingTarget);

        // A hit followed by a miss leaves a stale preview that can't be confirmed
        picker.update(&body, &ray_toward(Coordinates::new(10.0, 20.0)));
        picker.update(&body, &missing_ray());
        assert!(picker.confirm().is_none());
        assert!(picker.target().is_none());

        picker.update(&body, &ray_toward(Coordinates::new(10.0, 20.0)));
        assert!(picker.confirm().is_some());
        assert_eq!(picker.state(), SystemState::TargetSelected);
    }

    #[test]
    fn no_surface_is_rejected() {
        let mut sun = kerbin();
        sun.name = "Kerbol".to_string();
        sun.has_surface = false;

        let mut picker = TargetPicker::new(&kerbin());
        let error = picker.start_picking(&sun).unwrap_err();
        assert!(matches!(error, PickingError::NoSurface(ref name) if name == "Kerbol"));
        assert_eq!(picker.state(), SystemState::NoTargetSelected);
    }

    #[test]
    fn start_while_picking_is_noop() {
        let body = kerbin();
        let mut picker = TargetPicker::new(&body);
        picker.start_picking(&body).unwrap();
        picker.update(&body, &ray_toward(Coordinates::new(1.0, 2.0)));
        let preview = picker.location().clone();

        picker.start_picking(&body).unwrap();
        assert_eq!(picker.location(), &preview);
        assert_eq!(picker.state(), SystemState::PickingTarget);
    }

    #[test]
    fn body_change_cancels() {
        let body = kerbin();
        let mut mun = kerbin();
        mun.name = "Mun".to_string();

        let mut picker = TargetPicker::new(&body);
        picker.start_picking(&body).unwrap();
        assert_eq!(picker.update(&mun, &ray_toward(Coordinates::default())), SurfaceQuery::NotFound);
        assert_eq!(picker.state(), SystemState::NoTargetSelected);
    }

    #[test]
    fn cancel_and_confirm_outside_picking() {
        let body = kerbin();
        let mut picker = TargetPicker::new(&body);
        assert!(picker.confirm().is_none());
        picker.cancel();
        assert_eq!(picker.state(), SystemState::NoTargetSelected);
        assert_eq!(picker.update(&body, &ray_toward(Coordinates::default())), SurfaceQuery::NotFound);
    }

    #[test]
    fn typed_target_and_delete() {
        let body = kerbin();
        let mut picker = TargetPicker::new(&body);
        picker.start_picking(&body).unwrap();

        let location = GlobalLocation::on_surface(&body, Coordinates::new(0.0, 90.0));
        picker.set_target_location(location.clone());
        assert_eq!(picker.state(), SystemState::TargetSelected);
        assert_eq!(picker.target(), Some(&location));

        let distance = picker.distance_from(&body, &Point::new(0.0, 700_000.0, 0.0)).unwrap();
        assert!((distance - 100_000.0).abs() < 1e-6);

        picker.delete_target(&body);
        assert_eq!(picker.state(), SystemState::NoTargetSelected);
        assert_eq!(picker.location().coordinates, Coordinates::default());
        assert!(picker.distance_from(&body, &Point::zero()).is_none());
    }
}
