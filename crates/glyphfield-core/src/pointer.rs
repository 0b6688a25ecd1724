/// Pointer position in grid coordinates, plus whether the pointer is
/// currently engaged (pressed). The shell maps device coordinates into grid
/// space before handing this in; see [`PointerState::from_viewport`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub x: f64,
    pub y: f64,
    pub active: bool,
}

impl PointerState {
    pub fn new(x: f64, y: f64, active: bool) -> Self {
        Self { x, y, active }
    }

    /// Map a device position inside a viewport rectangle into grid space
    /// `[0,width) x [0,height)`. `view_w`/`view_h` are the rectangle extent
    /// in device units, `px`/`py` the position relative to its origin.
    pub fn from_viewport(
        px: f64,
        py: f64,
        view_w: f64,
        view_h: f64,
        width: u32,
        height: u32,
        active: bool,
    ) -> Self {
        Self {
            x: px / view_w * width as f64,
            y: py / view_h * height as f64,
            active,
        }
    }
}

/// Additive pointer perturbation of a field sample.
///
/// Only an engaged pointer perturbs: influence decays exponentially with
/// distance from the pointer cell and pulses with `sin(t*3)`. Pure function
/// of its inputs; inactive pointers return `value` unchanged.
pub fn perturb(value: f64, x: f64, y: f64, pointer: PointerState, t: f64) -> f64 {
    if !pointer.active {
        return value;
    }
    let dx = x - pointer.x;
    let dy = y - pointer.y;
    let dist = (dx * dx + dy * dy).sqrt();
    let influence = (-dist * 0.2).exp() * (t * 3.0).sin();
    value + influence * 0.5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inactive_pointer_is_identity() {
        let ptr = PointerState::new(3.0, 3.0, false);
        assert_eq!(perturb(0.25, 10.0, 10.0, ptr, 2.0), 0.25);
    }

    #[test]
    fn coincident_cell_gets_maximum_influence() {
        // dist == 0 so the decay factor is exp(0) == 1 and the perturbation
        // is exactly 0.5 * sin(3t).
        let ptr = PointerState::new(5.0, 5.0, true);
        let t = 0.7;
        let got = perturb(0.0, 5.0, 5.0, ptr, t);
        assert_eq!(got, 0.5 * (t * 3.0).sin());
    }

    #[test]
    fn influence_decays_with_distance() {
        let ptr = PointerState::new(0.0, 0.0, true);
        // Pick a t where sin(3t) > 0 so magnitudes are comparable.
        let t = 0.4;
        let near = (perturb(0.0, 1.0, 0.0, ptr, t)).abs();
        let far = (perturb(0.0, 9.0, 0.0, ptr, t)).abs();
        assert!(near > far);
    }

    #[test]
    fn viewport_transform_maps_corners() {
        let p = PointerState::from_viewport(0.0, 0.0, 400.0, 200.0, 60, 30, true);
        assert_eq!((p.x, p.y), (0.0, 0.0));

        let p = PointerState::from_viewport(200.0, 100.0, 400.0, 200.0, 60, 30, true);
        assert_eq!((p.x, p.y), (30.0, 15.0));
    }
}
