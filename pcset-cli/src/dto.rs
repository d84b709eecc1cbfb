use pcset::catalog::SetClass;
use pcset::PcSet;
use serde::Deserialize;
use serde::Serialize;

use crate::CliResult;

#[derive(Debug, Deserialize, Serialize)]
pub struct AnalysisDto {
    pub set: Vec<u8>,
    pub algorithm: String,
    pub normal_form: Vec<u8>,
    pub prime_form: Vec<u8>,
    pub interval_class_vector: [u8; 6],
    pub forte_name: Option<String>,
    pub z_partner: Option<String>,
    pub complement: Option<String>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct SetClassDto {
    pub name: String,
    pub cardinality: usize,
    pub prime_form: Vec<u8>,
    pub interval_class_vector: [u8; 6],
    pub z_related: bool,
}

impl SetClassDto {
    pub fn from_set_class(set_class: &SetClass) -> Self {
        Self {
            name: set_class.name().to_owned(),
            cardinality: set_class.cardinality(),
            prime_form: pcs(set_class.prime_form()),
            interval_class_vector: set_class.interval_class_vector().counts(),
            z_related: set_class.is_z_related(),
        }
    }
}

pub fn pcs(set: &PcSet) -> Vec<u8> {
    set.pcs().to_vec()
}

pub fn to_yaml(value: &impl Serialize) -> CliResult<String> {
    Ok(serde_yaml::to_string(value)?)
}
