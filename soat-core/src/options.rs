//! Fixed choices offered by the vehicle metadata pickers.

pub const USAGES: &[&str] = &["PARTICULAR", "CARGA", "COMERCIAL", "TRANS PERSONAL"];

pub const CIRCULATION_REGIONS: &[&str] = &[
    "AREQUIPA",
    "LA LIBERTAD",
    "AMAZONAS",
    "ANCASH",
    "APURIMAC",
    "AYACUCHO",
    "CAJAMARCA",
    "CUSCO",
    "HUANCAVELICA",
    "HUANUCO",
    "ICA",
    "JUNIN",
    "LAMBAYEQUE",
    "LIMA",
    "LORETO",
    "MADRE DE DIOS",
    "MOQUEGUA",
    "PASCO",
    "PIURA",
    "PUNO",
    "SAN MARTIN",
    "TACNA",
    "TUMBES",
    "CALLAO",
    "UCAYALI",
];

pub const VEHICLE_CLASSES: &[&str] = &[
    "AUTOMOVIL",
    "CAM. PICK UP",
    "CAM. RURAL",
    "CAM. ST. WAGON",
    "MICROBUS",
    "MINIBUS",
    "OMNIBUS",
    "CAMION",
    "VOLQUETE",
    "BARANDA",
    "CAM. PANEL",
    "FURGON",
    "REMOLCADOR",
    "MOTOCICLETA",
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn catalogues_have_no_duplicates() {
        for list in [USAGES, CIRCULATION_REGIONS, VEHICLE_CLASSES] {
            let unique: HashSet<_> = list.iter().collect();
            assert_eq!(unique.len(), list.len());
        }
    }

    #[test]
    fn catalogue_sizes() {
        assert_eq!(USAGES.len(), 4);
        assert_eq!(CIRCULATION_REGIONS.len(), 25);
        assert_eq!(VEHICLE_CLASSES.len(), 14);
    }
}
