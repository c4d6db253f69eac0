/// Connection cost type (time or distance, the unit is up to the caller)
pub type Weight = f64;
