//! Model-keyed registry of device definitions.

use std::collections::HashMap;
use std::sync::Arc;

use meshbridge_app::ports::DefinitionCatalog;
use meshbridge_domain::converter::Definition;

use crate::converters::{
    BatteryReport, BrightnessReport, ColorReport, HumidityReport, MultistateAction,
    OccupancyReport, OnOffReport, PressReleaseClick, PressureReport, TemperatureReport,
};

/// Registry of supported device models.
pub struct Catalog {
    definitions: HashMap<&'static str, Arc<Definition>>,
}

impl Catalog {
    /// Build a registry from a list of definitions.
    #[must_use]
    pub fn new(definitions: Vec<Definition>) -> Self {
        Self {
            definitions: definitions
                .into_iter()
                .map(|definition| (definition.model(), Arc::new(definition)))
                .collect(),
        }
    }

    /// The standard catalog of supported devices.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(vec![
            Definition::new(
                "lumi.sensor_ht",
                "Xiaomi",
                "MiJia temperature & humidity sensor (WSDCGQ01LM)",
                vec![
                    Box::new(TemperatureReport),
                    Box::new(HumidityReport),
                    Box::new(BatteryReport),
                ],
            ),
            Definition::new(
                "lumi.weather",
                "Xiaomi",
                "Aqara temperature, humidity & pressure sensor (WSDCGQ11LM)",
                vec![
                    Box::new(TemperatureReport),
                    Box::new(HumidityReport),
                    Box::new(PressureReport),
                    Box::new(BatteryReport),
                ],
            ),
            Definition::new(
                "lumi.sensor_switch",
                "Xiaomi",
                "MiJia wireless switch (WXKG01LM)",
                vec![Box::new(PressReleaseClick::new()), Box::new(BatteryReport)],
            ),
            Definition::new(
                "lumi.sensor_switch.aq2",
                "Xiaomi",
                "Aqara wireless switch (WXKG11LM)",
                vec![Box::new(MultistateAction), Box::new(BatteryReport)],
            ),
            Definition::new(
                "lumi.sensor_motion",
                "Xiaomi",
                "MiJia human body movement sensor (RTCGQ01LM)",
                vec![Box::new(OccupancyReport), Box::new(BatteryReport)],
            ),
            Definition::new(
                "LCT001",
                "Philips",
                "Hue white and color ambiance E26 (8718696449691)",
                vec![
                    Box::new(OnOffReport),
                    Box::new(BrightnessReport),
                    Box::new(ColorReport),
                ],
            ),
            Definition::new(
                "TRADFRI bulb E27 WS opal 980lm",
                "IKEA of Sweden",
                "TRADFRI bulb E27 white spectrum opal (LED1545G12)",
                vec![
                    Box::new(OnOffReport),
                    Box::new(BrightnessReport),
                    Box::new(ColorReport),
                ],
            ),
        ])
    }

    /// Look up the definition for a model identifier.
    #[must_use]
    pub fn by_model(&self, model: &str) -> Option<Arc<Definition>> {
        self.definitions.get(model).cloned()
    }

    /// Number of registered models.
    #[must_use]
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Registered model identifiers.
    pub fn models(&self) -> impl Iterator<Item = &'static str> {
        self.definitions.keys().copied()
    }
}

impl DefinitionCatalog for Catalog {
    fn definition(&self, model: &str) -> Option<Arc<Definition>> {
        self.by_model(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use meshbridge_domain::event::{MessageType, clusters};

    #[test]
    fn should_register_all_standard_models() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.len(), 7);
        for model in [
            "lumi.sensor_ht",
            "lumi.weather",
            "lumi.sensor_switch",
            "lumi.sensor_switch.aq2",
            "lumi.sensor_motion",
            "LCT001",
            "TRADFRI bulb E27 WS opal 980lm",
        ] {
            assert!(catalog.by_model(model).is_some(), "missing {model}");
        }
    }

    #[test]
    fn should_return_none_for_unknown_model() {
        let catalog = Catalog::standard();
        assert!(catalog.by_model("lumi.unknown").is_none());
    }

    #[test]
    fn should_order_climate_converters_before_battery() {
        let catalog = Catalog::standard();
        let definition = catalog.by_model("lumi.weather").unwrap();
        let converters = definition.converters();
        assert_eq!(converters.len(), 4);
        assert_eq!(converters[0].cluster(), clusters::MS_TEMPERATURE);
        assert_eq!(converters[3].cluster(), clusters::GEN_POWER_CFG);
    }

    #[test]
    fn should_select_color_converter_for_bulb_reports() {
        let catalog = Catalog::standard();
        let definition = catalog.by_model("LCT001").unwrap();
        let matching: Vec<_> = definition
            .matching_converters(clusters::LIGHTING_COLOR_CTRL, MessageType::AttributeReport)
            .collect();
        assert_eq!(matching.len(), 1);
    }

    #[test]
    fn should_expose_definition_through_the_port() {
        let catalog = Catalog::standard();
        let definition = DefinitionCatalog::definition(&catalog, "lumi.sensor_ht");
        assert_eq!(definition.unwrap().vendor(), "Xiaomi");
    }
}
