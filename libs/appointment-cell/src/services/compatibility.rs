// libs/appointment-cell/src/services/compatibility.rs
use tracing::debug;

use catalog_cell::models::{Service, ServiceCategory};
use shared_models::display::SelectOption;
use staff_cell::models::{Position, Staff};

/// Which staff positions may perform a service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaffRequirement {
    Barber,
    Stylist,
    BarberOrStylist,
    /// No service selected yet.
    Anyone,
}

impl StaffRequirement {
    pub fn for_category(category: ServiceCategory) -> Self {
        match category {
            ServiceCategory::Haircut | ServiceCategory::Beard => StaffRequirement::Barber,
            ServiceCategory::Styling | ServiceCategory::Color => StaffRequirement::Stylist,
            ServiceCategory::Other => StaffRequirement::BarberOrStylist,
        }
    }

    pub fn for_service(service: Option<&Service>) -> Self {
        service
            .map(|service| Self::for_category(service.category))
            .unwrap_or(StaffRequirement::Anyone)
    }

    pub fn allows(&self, position: Position) -> bool {
        match self {
            StaffRequirement::Barber => position == Position::Barber,
            StaffRequirement::Stylist => position == Position::Stylist,
            StaffRequirement::BarberOrStylist => {
                matches!(position, Position::Barber | Position::Stylist)
            }
            StaffRequirement::Anyone => true,
        }
    }
}

pub fn is_eligible(service: Option<&Service>, staff: &Staff) -> bool {
    StaffRequirement::for_service(service).allows(staff.position)
}

/// Staff who may perform `service`, in their stored order.
pub fn eligible_staff<'a>(service: Option<&Service>, staff: &'a [Staff]) -> Vec<&'a Staff> {
    let requirement = StaffRequirement::for_service(service);
    debug!("Resolving staff for {:?}", requirement);

    staff
        .iter()
        .filter(|member| requirement.allows(member.position))
        .collect()
}

/// Staff picker entries keyed by name, behind a placeholder naming the service.
pub fn staff_options(service: Option<&Service>, staff: &[Staff]) -> Vec<SelectOption> {
    let placeholder = match service {
        Some(service) => SelectOption::placeholder(format!("Select staff for {}", service.name)),
        None => SelectOption::placeholder("Select a staff member"),
    };

    std::iter::once(placeholder)
        .chain(
            eligible_staff(service, staff)
                .into_iter()
                .map(|member| SelectOption::new(member.name.clone(), member.picker_label())),
        )
        .collect()
}

/// Service picker entries keyed by id.
pub fn service_options(services: &[Service]) -> Vec<SelectOption> {
    std::iter::once(SelectOption::placeholder("Select a service"))
        .chain(
            services
                .iter()
                .map(|service| SelectOption::new(service.id.to_string(), service.name.clone())),
        )
        .collect()
}
