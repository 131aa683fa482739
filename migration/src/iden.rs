use sea_orm_migration::prelude::*;

// Define table names
#[derive(DeriveIden)]
pub enum Post {
    Table,
    Id,
    Name,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub enum Hotels {
    Table,
    Id,
    Name,
    Address,
    Phone,
    Deleted,
}

#[derive(DeriveIden)]
pub enum Users {
    Table,
    Id,
    Email,
    Password,
    Role,
}

#[derive(DeriveIden)]
pub enum Rooms {
    Table,
    Number,
    HotelId,
    Floor,
    Available,
    Beds,
    Description,
    DailyRate,
}

#[derive(DeriveIden)]
pub enum Employees {
    Table,
    Cpf,
    UserId,
    HotelId,
    Name,
    Phone,
    Address,
}

#[derive(DeriveIden)]
pub enum Tasks {
    Table,
    Id,
    EmployeeId,
    Description,
    Start,
    End,
}

#[derive(DeriveIden)]
pub enum Customers {
    Table,
    Cpf,
    Name,
    Email,
    Phone,
    Address,
}

#[derive(DeriveIden)]
pub enum Reservations {
    Table,
    Number,
    RoomNumber,
    CheckIn,
    CheckOut,
    TotalPrice,
    StatusPaid,
    Vehicles,
}

#[derive(DeriveIden)]
pub enum CustomerReservations {
    Table,
    CustomerCpf,
    ReservationNumber,
}

#[derive(DeriveIden)]
pub enum RoomServices {
    Table,
    TaskId,
    ReservationNumber,
    Price,
}

#[derive(DeriveIden)]
pub enum Expenses {
    Table,
    Id,
    HotelId,
    Description,
    Value,
    Date,
}
