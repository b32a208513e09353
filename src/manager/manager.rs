use std::cell::{
    RefCell, RefMut
};
use std::collections::HashMap;

use log::debug;

use super::managererror::ManagerError;
use super::namedobject::NamedJsonObject;


pub trait IManager<V> where
    V: Clone {
    fn map(&self) -> RefMut<'_, HashMap<String, V>>;

    fn insert_obj_from_json(&self, json_value: serde_json::Value) -> Result<(), ManagerError>;

    fn get(&self, name: &str) -> Result<V, ManagerError> {
        let map = self.map();
        map.get(name).map_or(
            Err(ManagerError::map_elem_not_found(name)),
            |elem| Ok(elem.clone())
        )
    }

    /// 依名稱排序
    fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.map().keys().cloned().collect();
        names.sort();
        names
    }

    fn insert_obj_from_json_vec(&self, json_vec: &Vec<serde_json::Value>) -> Result<(), ManagerError> {
        for j in json_vec.iter() {
            self.insert_obj_from_json(j.clone())?;
        }
        Ok(())
    }
}


pub struct Manager<V> {
    map_cell: RefCell<HashMap<String, V>>,
    get_obj_from_json: fn(serde_json::Value) -> Result<V, ManagerError>
}


impl <V> Manager<V> where
    V: Clone {
    pub fn new(get_obj_from_json: fn(serde_json::Value) -> Result<V, ManagerError>) -> Manager<V> {
        Manager {map_cell: RefCell::new(HashMap::new()), get_obj_from_json}
    }

    pub fn len(&self) -> usize {
        self.map().len()
    }

    pub fn is_empty(&self) -> bool {
        self.map().is_empty()
    }
}

impl <V> IManager<V> for Manager<V> where
    V: Clone {
    fn map(&self) -> RefMut<'_, HashMap<String, V>> {
        self.map_cell.borrow_mut()
    }

    fn insert_obj_from_json(&self, json_value: serde_json::Value) -> Result<(), ManagerError> {
        let named_object: NamedJsonObject = ManagerError::from_json_or_json_parse_error(json_value.clone())?;
        let v = (self.get_obj_from_json)(json_value)?;
        debug!("registered '{}'", named_object.name());
        self.map().insert(named_object.name().to_owned(), v);
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn get_step_from_json(json_value: serde_json::Value) -> Result<f64, ManagerError> {
        json_value
            .get("step")
            .and_then(|step| step.as_f64())
            .ok_or_else(|| ManagerError::map_elem_not_found("step"))
    }

    #[test]
    fn insert_and_get() {
        let manager = Manager::new(get_step_from_json);
        let json_vec = vec![
            serde_json::json!({"name": "coarse", "step": 0.5}),
            serde_json::json!({"name": "fine", "step": 1e-3})
        ];
        manager.insert_obj_from_json_vec(&json_vec).unwrap();
        assert_eq!(manager.len(), 2);
        assert_eq!(manager.get("fine").unwrap(), 1e-3);
        assert_eq!(manager.names(), vec!["coarse".to_owned(), "fine".to_owned()]);
        assert!(matches!(manager.get("medium"), Err(ManagerError::NameNotFoundError(name)) if name == "medium"));
    }

    #[test]
    fn missing_name_is_a_parse_error() {
        let manager = Manager::new(get_step_from_json);
        let result = manager.insert_obj_from_json(serde_json::json!({"step": 0.5}));
        assert!(matches!(result, Err(ManagerError::JsonParseError(_))));
        assert!(manager.is_empty());
    }
}
