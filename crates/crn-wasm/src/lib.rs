use wasm_bindgen::prelude::*;
use crn_core::{CatchmentReport, InputParameters};

/// Parse a parameter JSON object (missing keys take defaults) and run the model.
fn run_from_json(params_json: &str) -> anyhow::Result<CatchmentReport> {
    let params: InputParameters = serde_json::from_str(params_json)
        .map_err(|e| anyhow::anyhow!("Invalid params: {e}"))?;
    Ok(crn_core::run(&params)?)
}

/// Run the mixing model for the given parameters JSON.
/// Returns the full report as a JS object.
#[wasm_bindgen]
pub fn run_model(params_json: &str) -> Result<JsValue, JsValue> {
    let report = run_from_json(params_json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    serde_wasm_bindgen::to_value(&report).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Default parameters as JSON, for seeding a front-end form.
#[wasm_bindgen]
pub fn default_params() -> String {
    serde_json::to_string(&InputParameters::default()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_round_trip_through_json() {
        let report = run_from_json(&default_params()).unwrap();
        assert_eq!(report.geometry.flux_mt, 621.0);
    }

    #[test]
    fn empty_object_uses_defaults() {
        let report = run_from_json("{}").unwrap();
        assert_eq!(report.inputs, InputParameters::default());
    }

    #[test]
    fn model_errors_are_reported() {
        let err = run_from_json(r#"{ "background_erosion_rate": 0.0 }"#).unwrap_err();
        assert!(err.to_string().contains("division by zero"));
        let err = run_from_json("not json").unwrap_err();
        assert!(err.to_string().starts_with("Invalid params"));
    }
}
