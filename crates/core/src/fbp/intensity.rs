//! Head fire intensity and the derived operational classes
//!
//! HFI = 300 × TFC × ROS (Byram's fireline intensity with the FBP System's
//! 18 000 kJ/kg heat of combustion folded into the constant).
//!
//! # Scientific References
//! - Byram, G.M. (1959). "Combustion of forest fuels", in Forest Fire: Control and Use
//! - Forestry Canada Fire Danger Group (1992). Information Report ST-X-3, Equation 69
//! - BC Wildfire Service intensity class table (HFI calculator intensity groups)

/// Upper bounds of each intensity group (kW/m)
///
/// A value exactly on a bound belongs to the lower group: HFI 500 is group 1,
/// HFI 500.01 is group 2. Anything above [`GROUP_4_MAX`] is group 5.
pub mod intensity_group_bounds {
    /// Group 1: `[0, 500]`
    pub const GROUP_1_MAX: f64 = 500.0;

    /// Group 2: `(500, 1000]`
    pub const GROUP_2_MAX: f64 = 1000.0;

    /// Group 3: `(1000, 2000]`
    pub const GROUP_3_MAX: f64 = 2000.0;

    /// Group 4: `(2000, 4000]`
    pub const GROUP_4_MAX: f64 = 4000.0;
}

/// Calculate head fire intensity (kW/m)
///
/// # Arguments
/// * `tfc` - Total fuel consumption (kg/m²)
/// * `ros` - Head fire rate of spread (m/min)
///
/// # References
/// FCFDG (1992), Equation 69
pub fn head_fire_intensity(tfc: f64, ros: f64) -> f64 {
    300.0 * tfc * ros
}

/// Intensity group (1-5) for a head fire intensity
///
/// # Returns
/// `None` when the intensity is not a finite number
pub fn intensity_group(hfi: f64) -> Option<u8> {
    use intensity_group_bounds::{GROUP_1_MAX, GROUP_2_MAX, GROUP_3_MAX, GROUP_4_MAX};

    if !hfi.is_finite() {
        return None;
    }
    let group = match hfi {
        _ if hfi <= GROUP_1_MAX => 1,
        _ if hfi <= GROUP_2_MAX => 2,
        _ if hfi <= GROUP_3_MAX => 3,
        _ if hfi <= GROUP_4_MAX => 4,
        _ => 5,
    };
    Some(group)
}

/// Approximate flame length (m)
///
/// Field approximation L = √(I / 300)
pub fn flame_length(hfi: f64) -> f64 {
    if hfi <= 0.0 {
        return 0.0;
    }
    (hfi / 300.0).sqrt()
}
