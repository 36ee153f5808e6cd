/// One fixed account per role tier of the platform under test.
pub(crate) struct SeedUser {
    pub email: &'static str,
    pub password: &'static str,
    pub full_name: &'static str,
    pub role_id: i64,
    pub role_name: &'static str,
}

pub(crate) const TEST_USERS: [SeedUser; 5] = [
    SeedUser {
        email: "company-admin@test.snsd.com",
        password: "CompanyAdmin123!",
        full_name: "Test Company Admin",
        role_id: 2,
        role_name: "Company Admin",
    },
    SeedUser {
        email: "hse-specialist@test.snsd.com",
        password: "HSESpecialist123!",
        full_name: "Test HSE Specialist",
        role_id: 3,
        role_name: "HSE Specialist",
    },
    SeedUser {
        email: "contractor-admin@test.snsd.com",
        password: "Contractor123!",
        full_name: "Test Contractor Admin",
        role_id: 4,
        role_name: "Contractor Admin",
    },
    SeedUser {
        email: "supervisor@test.snsd.com",
        password: "Supervisor123!",
        full_name: "Test Supervisor",
        role_id: 5,
        role_name: "Supervisor",
    },
    SeedUser {
        email: "worker@test.snsd.com",
        password: "Worker123!",
        full_name: "Test Worker",
        role_id: 6,
        role_name: "Worker",
    },
];
