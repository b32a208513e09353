use crate::manager::manager::Manager;
use crate::manager::managererror::ManagerError;
use crate::math::differentiation::differenceformula::DifferenceFormulaGenerator;


fn get_difference_formula_generator_from_json(json_value: serde_json::Value) -> Result<DifferenceFormulaGenerator, ManagerError> {
    ManagerError::from_json_or_json_parse_error(json_value)
}


pub struct DifferenceFormulaGeneratorManager;


impl DifferenceFormulaGeneratorManager {
    pub fn new() -> Manager<DifferenceFormulaGenerator> {
        Manager::new(get_difference_formula_generator_from_json)
    }
}
