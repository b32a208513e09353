use std::cell::{
    RefCell,
    RefMut
};
use std::fs::File;
use std::io::BufReader;

use log::debug;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::manager::managererror::ManagerError;
use crate::manager::manager::{
    IManager,
    Manager
};
use crate::manager::namedobject::NamedJsonObject;
use crate::math::convergence::convergencestudy::ConvergenceSettings;
use crate::math::differentiation::differenceformula::DifferenceFormulaGenerator;
use crate::math::differentiation::differenceformulamanager::DifferenceFormulaGeneratorManager;
use crate::math::integration::quadraturerule::QuadratureRuleGenerator;
use crate::math::integration::quadraturerulemanager::QuadratureRuleGeneratorManager;


#[derive(Deserialize)]
struct ConfigurationJsonProp {
    #[serde(default)]
    difference_formula: Vec<serde_json::Value>,
    #[serde(default)]
    quadrature_rule: Vec<serde_json::Value>,
    #[serde(default)]
    convergence: ConvergenceSettings
}

pub struct Configuration {
    difference_formula_generator_manager_cell: RefCell<Manager<DifferenceFormulaGenerator>>,
    quadrature_rule_generator_manager_cell: RefCell<Manager<QuadratureRuleGenerator>>,
    convergence_settings: RefCell<ConvergenceSettings>
}


impl Configuration {
    pub fn new() -> Configuration {
        Configuration {
            difference_formula_generator_manager_cell: RefCell::new(DifferenceFormulaGeneratorManager::new()),
            quadrature_rule_generator_manager_cell: RefCell::new(QuadratureRuleGeneratorManager::new()),
            convergence_settings: RefCell::new(ConvergenceSettings::default())
        }
    }

    pub fn difference_formula_generator_manager(&self) -> RefMut<'_, Manager<DifferenceFormulaGenerator>> {
        self.difference_formula_generator_manager_cell.borrow_mut()
    }

    pub fn quadrature_rule_generator_manager(&self) -> RefMut<'_, Manager<QuadratureRuleGenerator>> {
        self.quadrature_rule_generator_manager_cell.borrow_mut()
    }

    pub fn convergence_settings(&self) -> ConvergenceSettings {
        self.convergence_settings.borrow().clone()
    }

    /// 依名稱排序的 (名稱, 差分公式) 列表
    pub fn difference_formula_generators(&self) -> Vec<(String, DifferenceFormulaGenerator)> {
        let manager = self.difference_formula_generator_manager();
        let mut generators: Vec<(String, DifferenceFormulaGenerator)> = manager
            .map()
            .iter()
            .map(|(name, generator)| (name.to_owned(), *generator))
            .collect();
        generators.sort_by(|lhs, rhs| lhs.0.cmp(&rhs.0));
        generators
    }

    /// 依名稱排序的 (名稱, 積分法則) 列表
    pub fn quadrature_rule_generators(&self) -> Vec<(String, QuadratureRuleGenerator)> {
        let manager = self.quadrature_rule_generator_manager();
        let mut generators: Vec<(String, QuadratureRuleGenerator)> = manager
            .map()
            .iter()
            .map(|(name, generator)| (name.to_owned(), *generator))
            .collect();
        generators.sort_by(|lhs, rhs| lhs.0.cmp(&rhs.0));
        generators
    }

    pub fn from_reader(&self, file_path: String) -> Result<(), ManagerError> {
        let file = File::open(&file_path)?;
        let reader = BufReader::new(file);
        let json_prop: ConfigurationJsonProp = serde_json::from_reader(reader)?;
        debug!("loading configuration from {}", file_path);
        self.load(json_prop)
    }

    pub fn from_json_str(&self, json: &str) -> Result<(), ManagerError> {
        let json_prop: ConfigurationJsonProp = serde_json::from_str(json)?;
        self.load(json_prop)
    }

    /// 逐筆解析 `{"name": ..., ...}` 物件，任一筆失敗即回傳錯誤
    fn parse_named_entries<G>(json_vec: &[serde_json::Value]) -> Result<Vec<(String, G)>, ManagerError> where
        G: DeserializeOwned {
        json_vec
            .iter()
            .map(|json_value| -> Result<(String, G), ManagerError> {
                let named_object: NamedJsonObject = ManagerError::from_json_or_json_parse_error(json_value.clone())?;
                let generator: G = ManagerError::from_json_or_json_parse_error(json_value.clone())?;
                Ok((named_object.name().to_owned(), generator))
            })
            .collect()
    }

    fn load(&self, json_prop: ConfigurationJsonProp) -> Result<(), ManagerError> {
        // 全部項目驗證通過後才寫入，避免部分載入
        let difference_formulas: Vec<(String, DifferenceFormulaGenerator)> =
            Self::parse_named_entries(&json_prop.difference_formula)?;
        let quadrature_rules: Vec<(String, QuadratureRuleGenerator)> =
            Self::parse_named_entries(&json_prop.quadrature_rule)?;
        for (name, generator) in quadrature_rules.iter() {
            for &n in json_prop.convergence.points_counts() {
                generator.scheme().verify_points_count(n).map_err(|source| {
                    ManagerError::InvalidQuadratureRule {
                        name: name.to_owned(),
                        source
                    }
                })?;
            }
        }

        let difference_formula_generator_manager = self.difference_formula_generator_manager();
        for (name, generator) in difference_formulas {
            difference_formula_generator_manager.map().insert(name, generator);
        }
        let quadrature_rule_generator_manager = self.quadrature_rule_generator_manager();
        for (name, generator) in quadrature_rules {
            quadrature_rule_generator_manager.map().insert(name, generator);
        }
        debug!("{} difference formulas, {} quadrature rules",
               difference_formula_generator_manager.len(),
               quadrature_rule_generator_manager.len());
        *self.convergence_settings.borrow_mut() = json_prop.convergence;
        Ok(())
    }
}
