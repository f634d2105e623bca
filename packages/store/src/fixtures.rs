//! Seed records for demo mode.

use api::{
    Address, Admin, BloodGroup, Contact, ContactStatus, Department, Designation, EmployeeType,
    IdCard, Product, ProductCategory, Ref,
};

pub const DEMO_EMAIL: &str = "admin@mychoice.com";
pub const DEMO_PASSWORD: &str = "demo123";
pub const SEEDED_AT: &str = "2024-01-15T10:00:00.000Z";

pub fn admin(now: &str) -> Admin {
    Admin {
        id: "demo-user-id".to_string(),
        full_name: "Demo Admin User".to_string(),
        email: DEMO_EMAIL.to_string(),
        role: "admin".to_string(),
        is_active: true,
        created_at: now.to_string(),
        updated_at: None,
    }
}

pub fn departments(now: &str) -> Vec<Department> {
    [
        ("dept-1", "Engineering", "ENG", "Software development and technical operations"),
        ("dept-2", "Human Resources", "HR", "Employee management and recruitment"),
        ("dept-3", "Finance", "FIN", "Financial planning and accounting"),
    ]
    .into_iter()
    .map(|(id, name, code, description)| Department {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        code: code.to_string(),
        is_active: true,
        created_at: now.to_string(),
        updated_at: None,
    })
    .collect()
}

pub fn designations(now: &str) -> Vec<Designation> {
    [
        ("desig-1", "Software Engineer", 3, "dept-1", "Full-stack development and system architecture"),
        ("desig-2", "Senior Developer", 4, "dept-1", "Lead development and code review"),
        ("desig-3", "HR Manager", 5, "dept-2", "Employee relations and policy management"),
    ]
    .into_iter()
    .map(|(id, title, level, department, description)| Designation {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        level,
        department: Ref::from(department),
        is_active: true,
        created_at: now.to_string(),
        updated_at: None,
    })
    .collect()
}

struct Employee {
    number: u32,
    picture: u64,
    employee_type: EmployeeType,
    name: &'static str,
    street: &'static str,
    city: &'static str,
    state: &'static str,
    zip: &'static str,
    blood: BloodGroup,
    mobile: &'static str,
    born: &'static str,
    joined: &'static str,
    department: &'static str,
    designation: &'static str,
}

pub fn id_cards() -> Vec<IdCard> {
    // dept-4 and desig-5 are dangling on purpose: views must cope with
    // references to records that no longer exist.
    let employees = [
        Employee {
            number: 1,
            picture: 1756465655146,
            employee_type: EmployeeType::FullTime,
            name: "John Smith",
            street: "123 Main Street",
            city: "New York",
            state: "NY",
            zip: "10001",
            blood: BloodGroup::APositive,
            mobile: "+1-555-0123",
            born: "1990-05-15",
            joined: "2023-01-15",
            department: "dept-1",
            designation: "desig-1",
        },
        Employee {
            number: 2,
            picture: 1756465655147,
            employee_type: EmployeeType::FullTime,
            name: "Sarah Johnson",
            street: "456 Oak Avenue",
            city: "Los Angeles",
            state: "CA",
            zip: "90210",
            blood: BloodGroup::BPositive,
            mobile: "+1-555-0456",
            born: "1988-12-20",
            joined: "2023-03-01",
            department: "dept-2",
            designation: "desig-3",
        },
        Employee {
            number: 3,
            picture: 1756465655148,
            employee_type: EmployeeType::Contract,
            name: "Michael Brown",
            street: "789 Pine Street",
            city: "Chicago",
            state: "IL",
            zip: "60601",
            blood: BloodGroup::OPositive,
            mobile: "+1-555-0789",
            born: "1992-08-10",
            joined: "2023-06-15",
            department: "dept-3",
            designation: "desig-4",
        },
        Employee {
            number: 4,
            picture: 1756465655149,
            employee_type: EmployeeType::PartTime,
            name: "Emily Davis",
            street: "321 Elm Street",
            city: "Miami",
            state: "FL",
            zip: "33101",
            blood: BloodGroup::AbPositive,
            mobile: "+1-555-0321",
            born: "1995-03-25",
            joined: "2023-09-01",
            department: "dept-4",
            designation: "desig-5",
        },
        Employee {
            number: 5,
            picture: 1756465655150,
            employee_type: EmployeeType::Intern,
            name: "David Wilson",
            street: "654 Maple Drive",
            city: "Seattle",
            state: "WA",
            zip: "98101",
            blood: BloodGroup::ANegative,
            mobile: "+1-555-0654",
            born: "2000-11-05",
            joined: "2024-01-01",
            department: "dept-1",
            designation: "desig-1",
        },
    ];

    employees
        .into_iter()
        .map(|e| {
            let email = format!("{}@company.com", e.name.to_lowercase().replace(' ', "."));
            IdCard {
                id: format!("idcard-{}", e.number),
                id_card_number: format!("EMP{:03}", e.number),
                employee_picture: format!(
                    "/uploads/employees/pictures/employee-{}-{}.png",
                    e.picture,
                    244016353 + e.number
                ),
                employee_type: e.employee_type,
                full_name: e.name.to_string(),
                address: Address {
                    street: e.street.to_string(),
                    city: e.city.to_string(),
                    state: e.state.to_string(),
                    zip_code: e.zip.to_string(),
                    country: "USA".to_string(),
                },
                blood_group: e.blood,
                mobile_number: e.mobile.to_string(),
                email,
                date_of_birth: e.born.to_string(),
                date_of_joining: e.joined.to_string(),
                department: Ref::from(e.department),
                designation: Ref::from(e.designation),
                is_active: true,
                created_at: SEEDED_AT.to_string(),
                updated_at: None,
            }
        })
        .collect()
}

pub fn categories() -> Vec<ProductCategory> {
    ["Kitchen Appliances", "Home Comfort", "Personal Care"]
        .into_iter()
        .enumerate()
        .map(|(i, name)| ProductCategory {
            id: format!("cat-{}", i + 1),
            name: name.to_string(),
            description: None,
            is_active: true,
        })
        .collect()
}

pub fn products() -> Vec<Product> {
    let seed = [
        (
            "prod-1",
            "Mixer Grinder 750W",
            "Kitchen Appliances",
            Some(3499.0),
            &["3 stainless steel jars", "Overload protection", "2 year warranty"][..],
            "Heavy duty mixer grinder for everyday Indian cooking.",
            "2024-01-10T09:30:00.000Z",
        ),
        (
            "prod-2",
            "Ceiling Fan 1200mm",
            "Home Comfort",
            Some(2199.0),
            &["Energy efficient motor", "Rust-free blades"][..],
            "High-speed ceiling fan with decorative finish.",
            "2024-01-12T11:00:00.000Z",
        ),
        (
            "prod-3",
            "Hair Dryer Pro",
            "Personal Care",
            None,
            &["Cool shot button", "Foldable handle"][..],
            "Compact travel hair dryer.",
            "2024-01-14T15:45:00.000Z",
        ),
    ];
    seed.into_iter()
        .map(|(id, name, category, price, features, description, created)| Product {
            id: id.to_string(),
            product_name: name.to_string(),
            product_features: features.iter().map(|f| f.to_string()).collect(),
            description: Some(description.to_string()),
            price,
            category: Some(category.to_string()),
            main_image: format!("/uploads/products/{id}.png"),
            additional_images: Vec::new(),
            is_active: true,
            created_at: created.to_string(),
            updated_at: created.to_string(),
        })
        .collect()
}

pub fn contacts() -> Vec<Contact> {
    let seed = [
        (
            "Ravi Kumar",
            "ravi.kumar@example.com",
            Some("+91-9876543210"),
            "Bulk order enquiry",
            "We would like a quotation for 50 mixer grinders.",
            ContactStatus::New,
            "2024-01-15T08:10:00.000Z",
        ),
        (
            "Anita Das",
            "anita.das@example.com",
            None,
            "Warranty claim",
            "My ceiling fan stopped working after three months.",
            ContactStatus::Read,
            "2024-01-14T17:25:00.000Z",
        ),
        (
            "Sourav Ghosh",
            "sourav.g@example.com",
            Some("+91-9123456780"),
            "Dealership",
            "Interested in becoming a dealer in Howrah.",
            ContactStatus::Replied,
            "2024-01-13T12:00:00.000Z",
        ),
        (
            "Meera Nair",
            "meera.nair@example.com",
            None,
            "Delivery status",
            "Order placed last week has not arrived yet.",
            ContactStatus::Closed,
            "2024-01-11T10:40:00.000Z",
        ),
        (
            "Arjun Mehta",
            "arjun.mehta@example.com",
            Some("+91-9988776655"),
            "Product demo",
            "Can someone demonstrate the hair dryer at our salon?",
            ContactStatus::New,
            "2024-01-10T14:05:00.000Z",
        ),
    ];
    seed.into_iter()
        .enumerate()
        .map(|(i, (name, email, mobile, subject, message, status, created))| Contact {
            id: format!("contact-{}", i + 1),
            full_name: name.to_string(),
            email_address: email.to_string(),
            mobile_number: mobile.map(str::to_string),
            subject: subject.to_string(),
            message: message.to_string(),
            status,
            ip_address: None,
            user_agent: None,
            created_at: created.to_string(),
            updated_at: created.to_string(),
        })
        .collect()
}
