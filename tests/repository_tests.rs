//! Tests de los repositorios PostgreSQL contra el schema de `migrations/`.
//! Cada test recibe una base nueva de `sqlx::test`; requieren DATABASE_URL.

use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;

use vehicle_rental::dto::maintenance_dto::StartMaintenanceRequest;
use vehicle_rental::dto::rental_dto::RentalRequest;
use vehicle_rental::models::customer::Customer;
use vehicle_rental::models::rental::RentalRegistration;
use vehicle_rental::models::vehicle::{Vehicle, VehicleAvailability};
use vehicle_rental::repositories::{
    CustomerRepository, MaintenanceRepository, PgCustomerRepository, PgMaintenanceRepository,
    PgRentalRepository, PgVehicleRepository, RentalRepository, VehicleRepository,
};
use vehicle_rental::AppError;

static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

struct Fixture {
    employee_id: i32,
    vehicle_id: i32,
}

/// Cliente "111", un empleado y un vehículo Available a 150.00 por día
async fn seed(pool: &PgPool) -> Fixture {
    let customer = Customer {
        national_id: "111".to_string(),
        name: "Maria Silva".to_string(),
        email: "maria@example.com".to_string(),
        phone: None,
    };
    PgCustomerRepository::new(pool.clone())
        .create(&customer)
        .await
        .unwrap();

    let employee_id: i32 =
        sqlx::query_scalar("INSERT INTO employees (name) VALUES ('Ana') RETURNING employee_id")
            .fetch_one(pool)
            .await
            .unwrap();

    let vehicle = Vehicle {
        vehicle_id: 0,
        plate: "ABC1234".to_string(),
        make: "Toyota".to_string(),
        model: "Corolla".to_string(),
        year: 2022,
        color: "Silver".to_string(),
        daily_price: Decimal::new(15000, 2),
        availability: VehicleAvailability::Available,
    };
    let vehicle_id = PgVehicleRepository::new(pool.clone())
        .create(&vehicle)
        .await
        .unwrap();

    Fixture {
        employee_id,
        vehicle_id,
    }
}

fn rental_request(fixture: &Fixture) -> RentalRequest {
    RentalRequest {
        customer_id: "111".to_string(),
        employee_id: fixture.employee_id,
        vehicle_id: fixture.vehicle_id,
        expected_return_date: Utc::now() + Duration::days(3),
    }
}

async fn register(repo: &PgRentalRepository, fixture: &Fixture) -> i32 {
    match repo.register(&rental_request(fixture)).await.unwrap() {
        RentalRegistration::Created(rental_id) => rental_id,
        RentalRegistration::Rejected(msg) => panic!("rental rejected: {msg}"),
    }
}

async fn availability_of(pool: &PgPool, vehicle_id: i32) -> VehicleAvailability {
    PgVehicleRepository::new(pool.clone())
        .find_by_id(vehicle_id)
        .await
        .unwrap()
        .unwrap()
        .availability
}

// --- Registro de locaciones ---

#[sqlx::test(migrator = "MIGRATOR")]
#[ignore = "requires PostgreSQL (DATABASE_URL)"]
async fn test_register_rental_reserves_vehicle(pool: PgPool) {
    let fixture = seed(&pool).await;
    let rentals = PgRentalRepository::new(pool.clone());

    let rental_id = register(&rentals, &fixture).await;
    assert_eq!(availability_of(&pool, fixture.vehicle_id).await, VehicleAvailability::Unavailable);

    let rental = rentals.find_by_id(rental_id).await.unwrap().unwrap();
    assert_eq!(rental.vehicle_id, fixture.vehicle_id);
    assert_eq!(rental.actual_return_date, None);

    // Vehículo ya ocupado: el mensaje viene de la rutina
    let second = rentals.register(&rental_request(&fixture)).await.unwrap();
    assert_eq!(
        second,
        RentalRegistration::Rejected("Vehicle is not available for rental.".to_string())
    );
    assert_eq!(rentals.find_all().await.unwrap().len(), 1);
}

#[sqlx::test(migrator = "MIGRATOR")]
#[ignore = "requires PostgreSQL (DATABASE_URL)"]
async fn test_register_rental_rejects_unknown_customer(pool: PgPool) {
    let fixture = seed(&pool).await;
    let rentals = PgRentalRepository::new(pool.clone());

    let mut request = rental_request(&fixture);
    request.customer_id = "999".to_string();

    let outcome = rentals.register(&request).await.unwrap();
    assert_eq!(outcome, RentalRegistration::Rejected("Customer not found.".to_string()));
    assert_eq!(availability_of(&pool, fixture.vehicle_id).await, VehicleAvailability::Available);
}

// --- Cierre ---

#[sqlx::test(migrator = "MIGRATOR")]
#[ignore = "requires PostgreSQL (DATABASE_URL)"]
async fn test_close_rental_prices_and_releases_vehicle(pool: PgPool) {
    let fixture = seed(&pool).await;
    let rentals = PgRentalRepository::new(pool.clone());
    let rental_id = register(&rentals, &fixture).await;

    let released = rentals.close(rental_id).await.unwrap();
    assert_eq!(released, Some(fixture.vehicle_id));

    let rental = rentals.find_by_id(rental_id).await.unwrap().unwrap();
    assert!(rental.actual_return_date.is_some());
    assert_eq!(rental.total_price, Some(Decimal::new(15000, 2)));
    assert_eq!(availability_of(&pool, fixture.vehicle_id).await, VehicleAvailability::Available);

    assert!(matches!(rentals.actual_return_date(rental_id).await.unwrap(), Some(Some(_))));
}

#[sqlx::test(migrator = "MIGRATOR")]
#[ignore = "requires PostgreSQL (DATABASE_URL)"]
async fn test_close_without_linked_vehicle_leaves_rental_open(pool: PgPool) {
    let fixture = seed(&pool).await;
    let rentals = PgRentalRepository::new(pool.clone());

    // Locación sin fila en rental_vehicles
    let rental_id: i32 = sqlx::query_scalar(
        r#"
        INSERT INTO rentals (customer_id, employee_id, expected_return_date)
        VALUES ('111', $1, NOW() + INTERVAL '1 day')
        RETURNING rental_id
        "#,
    )
    .bind(fixture.employee_id)
    .fetch_one(&pool)
    .await
    .unwrap();

    assert_eq!(rentals.close(rental_id).await.unwrap(), None);
    assert_eq!(rentals.actual_return_date(rental_id).await.unwrap(), Some(None));
    assert_eq!(rentals.actual_return_date(rental_id + 1000).await.unwrap(), None);
}

#[sqlx::test(migrator = "MIGRATOR")]
#[ignore = "requires PostgreSQL (DATABASE_URL)"]
async fn test_close_rolls_back_earlier_steps_when_pricing_fails(pool: PgPool) {
    let fixture = seed(&pool).await;
    let rentals = PgRentalRepository::new(pool.clone());
    let rental_id = register(&rentals, &fixture).await;

    // El paso del precio falla después de estampar la devolución
    sqlx::query("DROP FUNCTION fn_calculate_final_price(INTEGER)")
        .execute(&pool)
        .await
        .unwrap();

    let err = rentals.close(rental_id).await.unwrap_err();
    assert!(matches!(err, AppError::Database(_)));

    assert_eq!(rentals.actual_return_date(rental_id).await.unwrap(), Some(None));
    let rental = rentals.find_by_id(rental_id).await.unwrap().unwrap();
    assert_eq!(rental.total_price, None);
    assert_eq!(availability_of(&pool, fixture.vehicle_id).await, VehicleAvailability::Unavailable);
}

// --- Manutención ---

#[sqlx::test(migrator = "MIGRATOR")]
#[ignore = "requires PostgreSQL (DATABASE_URL)"]
async fn test_start_maintenance_trigger_locks_vehicle(pool: PgPool) {
    let fixture = seed(&pool).await;
    let maintenance = PgMaintenanceRepository::new(pool.clone());

    let request = StartMaintenanceRequest {
        vehicle_id: fixture.vehicle_id,
        employee_id: fixture.employee_id,
        description: Some("Oil change".to_string()),
    };
    let maintenance_id = maintenance.start(&request).await.unwrap();

    let status = maintenance.vehicle_availability(fixture.vehicle_id).await.unwrap();
    assert_eq!(status.as_deref(), Some("Unavailable"));

    let record = maintenance.find_by_id(maintenance_id).await.unwrap().unwrap();
    assert_eq!(record.end_date, None);
    assert_eq!(maintenance.vehicle_of(maintenance_id).await.unwrap(), Some(fixture.vehicle_id));
}

#[sqlx::test(migrator = "MIGRATOR")]
#[ignore = "requires PostgreSQL (DATABASE_URL)"]
async fn test_finish_maintenance_keeps_rented_vehicle_unavailable(pool: PgPool) {
    let fixture = seed(&pool).await;
    let rentals = PgRentalRepository::new(pool.clone());
    let maintenance = PgMaintenanceRepository::new(pool.clone());

    let rental_id = register(&rentals, &fixture).await;
    let request = StartMaintenanceRequest {
        vehicle_id: fixture.vehicle_id,
        employee_id: fixture.employee_id,
        description: None,
    };
    let maintenance_id = maintenance.start(&request).await.unwrap();

    maintenance.stamp_end(maintenance_id).await.unwrap();
    assert!(!maintenance.release_vehicle_if_idle(fixture.vehicle_id).await.unwrap());
    assert_eq!(availability_of(&pool, fixture.vehicle_id).await, VehicleAvailability::Unavailable);

    let record = maintenance.find_by_id(maintenance_id).await.unwrap().unwrap();
    assert!(record.end_date.is_some());

    // Cerrada la locación, el vehículo ya se puede liberar
    rentals.close(rental_id).await.unwrap();
    sqlx::query("UPDATE vehicles SET availability = 'Unavailable' WHERE vehicle_id = $1")
        .bind(fixture.vehicle_id)
        .execute(&pool)
        .await
        .unwrap();
    assert!(maintenance.release_vehicle_if_idle(fixture.vehicle_id).await.unwrap());
    assert_eq!(availability_of(&pool, fixture.vehicle_id).await, VehicleAvailability::Available);
}

// --- Claves únicas ---

#[sqlx::test(migrator = "MIGRATOR")]
#[ignore = "requires PostgreSQL (DATABASE_URL)"]
async fn test_unique_violations_map_to_conflict(pool: PgPool) {
    seed(&pool).await;

    let same_email = Customer {
        national_id: "222".to_string(),
        name: "Joao".to_string(),
        email: "maria@example.com".to_string(),
        phone: Some("555-0101".to_string()),
    };
    let err = PgCustomerRepository::new(pool.clone())
        .create(&same_email)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Conflict(msg) if msg.contains("222")));

    let same_plate = Vehicle {
        vehicle_id: 0,
        plate: "ABC1234".to_string(),
        make: "Fiat".to_string(),
        model: "Uno".to_string(),
        year: 2015,
        color: "White".to_string(),
        daily_price: Decimal::new(9000, 2),
        availability: VehicleAvailability::Available,
    };
    let err = PgVehicleRepository::new(pool.clone())
        .create(&same_plate)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Conflict(msg) if msg == "A vehicle with plate ABC1234 already exists."));
}

#[sqlx::test(migrator = "MIGRATOR")]
#[ignore = "requires PostgreSQL (DATABASE_URL)"]
async fn test_customers_are_listed_by_national_id(pool: PgPool) {
    seed(&pool).await;
    let customers = PgCustomerRepository::new(pool.clone());

    let earlier = Customer {
        national_id: "050".to_string(),
        name: "Carla".to_string(),
        email: "carla@example.com".to_string(),
        phone: None,
    };
    customers.create(&earlier).await.unwrap();

    let ids: Vec<String> = customers
        .find_all()
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.national_id)
        .collect();
    assert_eq!(ids, vec!["050".to_string(), "111".to_string()]);
}
