use crate::domain::models::Staff as DomainStaff;
use shared::{Staff as SharedStaff, StaffListResponse};

/// Roster rows whose sheet position is known to be stale.
/// Later rules win when a name matches more than one.
const POSITION_CORRECTIONS: [(&str, &str); 2] = [
    ("ชัชตะวัน", "ผู้อำนวยการ"),
    ("ภราดร", "รองผู้อำนวยการ"),
];

fn corrected_position(name: &str, position: String) -> String {
    POSITION_CORRECTIONS
        .iter()
        .filter(|(fragment, _)| name.contains(fragment))
        .last()
        .map(|(_, title)| title.to_string())
        .unwrap_or(position)
}

pub struct StaffMapper;

impl StaffMapper {
    pub fn to_domain(dto: SharedStaff) -> DomainStaff {
        let name = dto.name.trim().to_string();
        let position = corrected_position(&name, dto.position);
        DomainStaff {
            id: dto.id,
            name,
            position,
        }
    }

    pub fn to_dto(domain: DomainStaff) -> SharedStaff {
        SharedStaff {
            id: domain.id,
            name: domain.name,
            position: domain.position,
        }
    }

    pub fn to_list_dto(staff: Vec<DomainStaff>) -> StaffListResponse {
        StaffListResponse {
            staff: staff.into_iter().map(Self::to_dto).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, position: &str) -> SharedStaff {
        SharedStaff {
            id: "staff-1".to_string(),
            name: name.to_string(),
            position: position.to_string(),
        }
    }

    #[test]
    fn test_to_domain_corrects_known_positions() {
        let director = StaffMapper::to_domain(row("นางชัชตะวัน สีเขียว", "ครู"));
        assert_eq!(director.position, "ผู้อำนวยการ");

        let deputy = StaffMapper::to_domain(row("นายภราดร คัณทักษ์", "ครู"));
        assert_eq!(deputy.position, "รองผู้อำนวยการ");
    }

    #[test]
    fn test_to_domain_keeps_other_positions() {
        let teacher = StaffMapper::to_domain(row("  นายสมชาย ใจดี ", "ครูผู้ช่วย"));
        assert_eq!(teacher.name, "นายสมชาย ใจดี");
        assert_eq!(teacher.position, "ครูผู้ช่วย");
    }
}
