use crate::manager::manager::Manager;
use crate::manager::managererror::ManagerError;
use crate::math::integration::quadraturerule::QuadratureRuleGenerator;


fn get_quadrature_rule_generator_from_json(json_value: serde_json::Value) -> Result<QuadratureRuleGenerator, ManagerError> {
    ManagerError::from_json_or_json_parse_error(json_value)
}


pub struct QuadratureRuleGeneratorManager;


impl QuadratureRuleGeneratorManager {
    pub fn new() -> Manager<QuadratureRuleGenerator> {
        Manager::new(get_quadrature_rule_generator_from_json)
    }
}
