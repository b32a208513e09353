use serde::Deserialize;

/// 設定檔中每個具名物件共有的欄位；其餘欄位由各 manager 自行解析
#[derive(Clone, Deserialize)]
pub struct NamedJsonObject {
    name: String
}


impl NamedJsonObject {
    pub fn name(&self) -> &str {
        &self.name
    }
}
