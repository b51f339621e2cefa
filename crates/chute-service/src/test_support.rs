//! In-memory fakes for service unit tests
//!
//! Each fake implements a chute-core port over a mutex-guarded map so service
//! logic can be exercised without a database. `fail_link_updates` on the
//! guardian fake simulates a linkage write failing after the student row
//! committed.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::NaiveDate;
use chute_common::auth::JwtService;
use chute_common::BillingConfig;
use chute_core::traits::{
    BatchOutcome, ChargeRepository, GuardianRepository, IdentityProvider, RepoResult,
    ScheduleRepository, StudentRepository,
};
use chute_core::{
    AttendanceEntry, Category, Charge, DomainError, Guardian, ReferenceMonth, Role, Student,
    TrainingSlot,
};
use uuid::Uuid;

use crate::services::{ServiceContext, ServiceContextBuilder};

#[derive(Default)]
pub struct InMemoryGuardianRepo {
    pub guardians: Mutex<HashMap<Uuid, Guardian>>,
    pub fail_link_updates: AtomicBool,
}

#[async_trait]
impl GuardianRepository for InMemoryGuardianRepo {
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Guardian>> {
        Ok(self.guardians.lock().unwrap().get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> RepoResult<Option<Guardian>> {
        Ok(self
            .guardians
            .lock()
            .unwrap()
            .values()
            .find(|g| g.email == email)
            .cloned())
    }

    async fn list_by_role(&self, role: Role) -> RepoResult<Vec<Guardian>> {
        let mut result: Vec<_> = self
            .guardians
            .lock()
            .unwrap()
            .values()
            .filter(|g| g.role == role)
            .cloned()
            .collect();
        result.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(result)
    }

    async fn create(&self, guardian: &Guardian) -> RepoResult<()> {
        let mut guardians = self.guardians.lock().unwrap();
        if guardians.values().any(|g| g.email == guardian.email) {
            return Err(DomainError::EmailAlreadyExists);
        }
        guardians.insert(guardian.id, guardian.clone());
        Ok(())
    }

    async fn update_contact(
        &self,
        id: Uuid,
        name: &str,
        email: &str,
        phone: &str,
    ) -> RepoResult<()> {
        let mut guardians = self.guardians.lock().unwrap();
        let guardian = guardians
            .get_mut(&id)
            .ok_or(DomainError::GuardianNotFound(id))?;
        guardian.name = name.to_string();
        guardian.email = email.to_string();
        guardian.phone = phone.to_string();
        Ok(())
    }

    async fn add_student_link(&self, guardian_id: Uuid, student_id: Uuid) -> RepoResult<bool> {
        if self.fail_link_updates.load(Ordering::SeqCst) {
            return Err(DomainError::Database("link update failed".to_string()));
        }
        let mut guardians = self.guardians.lock().unwrap();
        match guardians.get_mut(&guardian_id) {
            Some(guardian) => {
                if !guardian.student_ids.contains(&student_id) {
                    guardian.student_ids.push(student_id);
                }
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn remove_student_link(&self, guardian_id: Uuid, student_id: Uuid) -> RepoResult<bool> {
        if self.fail_link_updates.load(Ordering::SeqCst) {
            return Err(DomainError::Database("link update failed".to_string()));
        }
        let mut guardians = self.guardians.lock().unwrap();
        match guardians.get_mut(&guardian_id) {
            Some(guardian) => {
                guardian.student_ids.retain(|id| *id != student_id);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[derive(Default)]
pub struct InMemoryStudentRepo {
    pub students: Mutex<HashMap<Uuid, Student>>,
    pub attendance: Mutex<HashMap<Uuid, Vec<AttendanceEntry>>>,
}

#[async_trait]
impl StudentRepository for InMemoryStudentRepo {
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Student>> {
        Ok(self.students.lock().unwrap().get(&id).cloned())
    }

    async fn list_all(&self) -> RepoResult<Vec<Student>> {
        let mut result: Vec<_> = self.students.lock().unwrap().values().cloned().collect();
        result.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(result)
    }

    async fn list_by_category(&self, category: Category) -> RepoResult<Vec<Student>> {
        let mut result: Vec<_> = self
            .students
            .lock()
            .unwrap()
            .values()
            .filter(|s| s.category == category)
            .cloned()
            .collect();
        result.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(result)
    }

    async fn list_active_by_guardian(&self, guardian_id: Uuid) -> RepoResult<Vec<Student>> {
        let mut result: Vec<_> = self
            .students
            .lock()
            .unwrap()
            .values()
            .filter(|s| s.guardian_id == guardian_id && s.active)
            .cloned()
            .collect();
        result.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(result)
    }

    async fn create(&self, student: &Student) -> RepoResult<()> {
        self.students
            .lock()
            .unwrap()
            .insert(student.id, student.clone());
        Ok(())
    }

    async fn update(&self, student: &Student) -> RepoResult<()> {
        let mut students = self.students.lock().unwrap();
        if !students.contains_key(&student.id) {
            return Err(DomainError::StudentNotFound(student.id));
        }
        students.insert(student.id, student.clone());
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        if self.students.lock().unwrap().remove(&id).is_none() {
            return Err(DomainError::StudentNotFound(id));
        }
        self.attendance.lock().unwrap().remove(&id);
        Ok(())
    }

    async fn set_attendance(
        &self,
        student_id: Uuid,
        date: NaiveDate,
        present: bool,
    ) -> RepoResult<()> {
        if !self.students.lock().unwrap().contains_key(&student_id) {
            return Err(DomainError::StudentNotFound(student_id));
        }
        let mut attendance = self.attendance.lock().unwrap();
        let entries = attendance.entry(student_id).or_default();
        match entries.iter_mut().find(|e| e.date == date) {
            Some(entry) => entry.present = present,
            None => entries.push(AttendanceEntry::new(date, present)),
        }
        Ok(())
    }

    async fn attendance_for(&self, student_id: Uuid) -> RepoResult<Vec<AttendanceEntry>> {
        let mut entries = self
            .attendance
            .lock()
            .unwrap()
            .get(&student_id)
            .cloned()
            .unwrap_or_default();
        entries.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(entries)
    }
}

#[derive(Default)]
pub struct InMemoryChargeRepo {
    pub charges: Mutex<Vec<Charge>>,
}

#[async_trait]
impl ChargeRepository for InMemoryChargeRepo {
    async fn create_if_absent(&self, charge: &Charge) -> RepoResult<bool> {
        let mut charges = self.charges.lock().unwrap();
        let duplicate = charges.iter().any(|c| {
            c.student_id == charge.student_id && c.reference_month == charge.reference_month
        });
        if duplicate {
            return Ok(false);
        }
        charges.push(charge.clone());
        Ok(true)
    }

    async fn create_many_if_absent(&self, staged: &[Charge]) -> RepoResult<BatchOutcome> {
        let mut outcome = BatchOutcome::default();
        for charge in staged {
            if self.create_if_absent(charge).await? {
                outcome.created += 1;
            } else {
                outcome.skipped += 1;
            }
        }
        Ok(outcome)
    }

    async fn list_by_guardian(&self, guardian_id: Uuid) -> RepoResult<Vec<Charge>> {
        let mut result: Vec<_> = self
            .charges
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.guardian_id == guardian_id)
            .cloned()
            .collect();
        result.sort_by(|a, b| b.reference_month.cmp(&a.reference_month));
        Ok(result)
    }

    async fn exists(&self, student_id: Uuid, month: ReferenceMonth) -> RepoResult<bool> {
        Ok(self
            .charges
            .lock()
            .unwrap()
            .iter()
            .any(|c| c.student_id == student_id && c.reference_month == month))
    }
}

#[derive(Default)]
pub struct InMemoryScheduleRepo {
    pub slots: Mutex<Vec<TrainingSlot>>,
}

#[async_trait]
impl ScheduleRepository for InMemoryScheduleRepo {
    async fn list_all(&self) -> RepoResult<Vec<TrainingSlot>> {
        Ok(self.slots.lock().unwrap().clone())
    }

    async fn create(&self, slot: &TrainingSlot) -> RepoResult<()> {
        self.slots.lock().unwrap().push(slot.clone());
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        let mut slots = self.slots.lock().unwrap();
        let before = slots.len();
        slots.retain(|s| s.id != id);
        if slots.len() == before {
            return Err(DomainError::TrainingSlotNotFound(id));
        }
        Ok(())
    }
}

/// One stored credential: (account id, password hash, must_reset)
type StoredAccount = (Uuid, String, bool);

#[derive(Default)]
pub struct InMemoryIdentityProvider {
    pub accounts: Mutex<HashMap<String, StoredAccount>>,
}

#[async_trait]
impl IdentityProvider for InMemoryIdentityProvider {
    async fn find_account_by_email(&self, email: &str) -> RepoResult<Option<Uuid>> {
        Ok(self.accounts.lock().unwrap().get(email).map(|(id, _, _)| *id))
    }

    async fn create_account(
        &self,
        account_id: Uuid,
        email: &str,
        password_hash: &str,
        must_reset: bool,
    ) -> RepoResult<()> {
        let mut accounts = self.accounts.lock().unwrap();
        if accounts.contains_key(email) {
            return Err(DomainError::EmailAlreadyExists);
        }
        accounts.insert(
            email.to_string(),
            (account_id, password_hash.to_string(), must_reset),
        );
        Ok(())
    }

    async fn password_hash(&self, account_id: Uuid) -> RepoResult<Option<String>> {
        Ok(self
            .accounts
            .lock()
            .unwrap()
            .values()
            .find(|(id, _, _)| *id == account_id)
            .map(|(_, hash, _)| hash.clone()))
    }

    async fn set_password(
        &self,
        account_id: Uuid,
        password_hash: &str,
        must_reset: bool,
    ) -> RepoResult<()> {
        let mut accounts = self.accounts.lock().unwrap();
        let account = accounts
            .values_mut()
            .find(|(id, _, _)| *id == account_id)
            .ok_or(DomainError::GuardianNotFound(account_id))?;
        account.1 = password_hash.to_string();
        account.2 = must_reset;
        Ok(())
    }

    async fn mark_reset_required(&self, account_id: Uuid) -> RepoResult<()> {
        let mut accounts = self.accounts.lock().unwrap();
        let account = accounts
            .values_mut()
            .find(|(id, _, _)| *id == account_id)
            .ok_or(DomainError::GuardianNotFound(account_id))?;
        account.2 = true;
        Ok(())
    }
}

/// Everything a service test needs: the context plus handles to the fakes
pub struct TestHarness {
    pub ctx: ServiceContext,
    pub guardians: Arc<InMemoryGuardianRepo>,
    pub students: Arc<InMemoryStudentRepo>,
    pub charges: Arc<InMemoryChargeRepo>,
    pub schedules: Arc<InMemoryScheduleRepo>,
    pub identity: Arc<InMemoryIdentityProvider>,
}

/// Build a ServiceContext wired to fresh in-memory fakes
pub fn test_harness() -> TestHarness {
    let guardians = Arc::new(InMemoryGuardianRepo::default());
    let students = Arc::new(InMemoryStudentRepo::default());
    let charges = Arc::new(InMemoryChargeRepo::default());
    let schedules = Arc::new(InMemoryScheduleRepo::default());
    let identity = Arc::new(InMemoryIdentityProvider::default());

    let ctx = ServiceContextBuilder::new()
        .guardian_repo(guardians.clone())
        .student_repo(students.clone())
        .charge_repo(charges.clone())
        .schedule_repo(schedules.clone())
        .identity_provider(identity.clone())
        .jwt_service(Arc::new(JwtService::new("test-secret", 3600)))
        .billing(BillingConfig {
            monthly_amount: 80.0,
        })
        .build()
        .expect("test context should build");

    TestHarness {
        ctx,
        guardians,
        students,
        charges,
        schedules,
        identity,
    }
}

/// Insert a guardian with the given role and return it
pub fn seed_guardian(harness: &TestHarness, name: &str, email: &str, role: Role) -> Guardian {
    let guardian = Guardian::new(
        Uuid::new_v4(),
        name.to_string(),
        email.to_string(),
        "11 99999-0000".to_string(),
        role,
    );
    harness
        .guardians
        .guardians
        .lock()
        .unwrap()
        .insert(guardian.id, guardian.clone());
    guardian
}

/// Insert a student for a guardian and mirror the link on the guardian side
pub fn seed_student(harness: &TestHarness, name: &str, guardian: &Guardian, active: bool) -> Student {
    let student = Student::new(
        Uuid::new_v4(),
        name.to_string(),
        chrono::NaiveDate::from_ymd_opt(2016, 5, 1).unwrap(),
        Category::Sub9,
        String::new(),
        active,
        guardian.id,
    );
    harness
        .students
        .students
        .lock()
        .unwrap()
        .insert(student.id, student.clone());
    if let Some(g) = harness.guardians.guardians.lock().unwrap().get_mut(&guardian.id) {
        g.student_ids.push(student.id);
    }
    student
}
