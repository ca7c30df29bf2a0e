use serde::{Deserialize, Serialize};

/// 변환기에서 다루는 물리량 종류를 나타낸다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum QuantityKind {
    Temperature,
    Energy,
    Power,
}

impl QuantityKind {
    /// 해당 물리량이 받아들이는 단위 문자열 예시.
    pub fn unit_hint(&self) -> &'static str {
        match self {
            QuantityKind::Temperature => "C, F, K, R",
            QuantityKind::Energy => "kJ, GJ, kWh, Btu, MBtu",
            QuantityKind::Power => "W, kW, Btu/h, MBH",
        }
    }
}
