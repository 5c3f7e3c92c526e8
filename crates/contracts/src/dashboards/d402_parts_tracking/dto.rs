use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Ответ `GET /api/parts/{product_designation}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PartsResponse {
    /// Детали изделия
    pub parts: Vec<Part>,
    /// Права текущего пользователя; `null` и отсутствие ключа дают `None`
    #[serde(default)]
    pub permissions: Option<PartPermissions>,
}

/// Деталь изделия в том виде, в каком её отдаёт API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Part {
    /// Обозначение детали (напр. "АСЦБ-000475")
    pub part_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub material: String,
    /// Этапы маршрута в порядке прохождения
    #[serde(default, deserialize_with = "null_as_default")]
    pub route_stages: Vec<RouteStage>,
    pub quantity_completed: i64,
    pub quantity_total: i64,
    pub history_url: String,
    pub edit_url: String,
    pub delete_url: String,
    pub qr_url: String,
}

/// `null` из nullable-колонки превращается в значение по умолчанию
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Part {
    /// Процент выполнения: completed / total × 100.
    ///
    /// Без ограничения сверху; при `quantity_total == 0` получается NaN или +inf.
    pub fn progress_percent(&self) -> f64 {
        (self.quantity_completed as f64 / self.quantity_total as f64) * 100.0
    }

    /// Текст под полосой прогресса, напр. "3 из 4"
    pub fn progress_text(&self) -> String {
        format!("{} из {}", self.quantity_completed, self.quantity_total)
    }
}

/// Этап маршрута
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RouteStage {
    pub name: String,
    pub status: StageStatus,
}

/// Статус этапа. На проводе это строка: "completed" или любое другое значение.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StageStatus {
    Completed,
    Other(String),
}

impl StageStatus {
    pub fn is_completed(&self) -> bool {
        matches!(self, StageStatus::Completed)
    }

    pub fn as_str(&self) -> &str {
        match self {
            StageStatus::Completed => "completed",
            StageStatus::Other(s) => s,
        }
    }
}

impl From<String> for StageStatus {
    fn from(value: String) -> Self {
        if value == "completed" {
            StageStatus::Completed
        } else {
            StageStatus::Other(value)
        }
    }
}

impl Serialize for StageStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for StageStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(StageStatus::from)
    }
}

/// Права пользователя на действия с деталями
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PartPermissions {
    #[serde(default)]
    pub can_edit: bool,
    #[serde(default)]
    pub can_delete: bool,
    #[serde(default)]
    pub can_generate_qr: bool,
}
