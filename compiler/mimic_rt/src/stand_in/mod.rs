//! The stand-in object.

use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use rustc_hash::FxHashMap;

use mimic_blueprint::{Blueprint, BlueprintMember, ReturnFallback};
use mimic_ir::TypeRef;

use crate::{Reply, RuntimeError, UnmockedMember, Value};

/// An installed override.
pub type Handler = Arc<dyn Fn(&[Value]) -> Reply + Send + Sync>;

/// A real implementation calls are forwarded to when no override answers.
pub trait LiveTarget: Send + Sync {
    fn call(&self, member: &BlueprintMember, args: &[Value]) -> Reply;
}

/// A recorded call.
#[derive(Clone, Debug)]
struct Invocation {
    slot: usize,
    args: Vec<Value>,
}

/// Runtime counterpart of a generated stand-in type.
///
/// Members are addressed by their generated name, so every overload has
/// its own slot. All methods take `&self`; a stand-in can be shared across
/// threads.
pub struct StandIn {
    blueprint: Blueprint,
    slots: FxHashMap<String, usize>,
    overrides: RwLock<FxHashMap<usize, Handler>>,
    target: RwLock<Option<Arc<dyn LiveTarget>>>,
    calls: Mutex<Vec<Invocation>>,
}

impl StandIn {
    pub fn new(blueprint: Blueprint) -> Self {
        let slots = blueprint
            .members
            .iter()
            .enumerate()
            .map(|(i, m)| (m.generated_name.clone(), i))
            .collect();
        StandIn {
            blueprint,
            slots,
            overrides: RwLock::new(FxHashMap::default()),
            target: RwLock::new(None),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn blueprint(&self) -> &Blueprint {
        &self.blueprint
    }

    /// Install an override for `member`, replacing any previous one.
    pub fn setup<F, R>(&self, member: &str, handler: F) -> Result<(), RuntimeError>
    where
        F: Fn(&[Value]) -> R + Send + Sync + 'static,
        R: Into<Reply>,
    {
        let slot = self.slot(member)?;
        let handler: Handler = Arc::new(move |args: &[Value]| -> Reply { handler(args).into() });
        self.overrides.write().insert(slot, handler);
        Ok(())
    }

    /// Override `member` to always return `value`.
    pub fn returns(&self, member: &str, value: impl Into<Value>) -> Result<(), RuntimeError> {
        let value = value.into();
        self.setup(member, move |_| value.clone())
    }

    /// Drop every override and the call history. The live target stays.
    pub fn reset(&self) {
        self.overrides.write().clear();
        self.calls.lock().clear();
    }

    pub fn attach(&self, target: Arc<dyn LiveTarget>) {
        *self.target.write() = Some(target);
    }

    pub fn detach(&self) {
        *self.target.write() = None;
    }

    /// Call `member` with `args`, one per declared parameter (`out`
    /// parameters included, their values ignored).
    ///
    /// Handlers and live targets run with no lock held, so they may call
    /// back into the stand-in.
    pub fn invoke(&self, member: &str, args: &[Value]) -> Result<Reply, RuntimeError> {
        let slot = self.slot(member)?;
        let declared = &self.blueprint.members[slot];
        if args.len() != declared.parameters.len() {
            return Err(RuntimeError::ArgumentCount {
                member: member.to_string(),
                expected: declared.parameters.len(),
                actual: args.len(),
            });
        }
        self.calls.lock().push(Invocation {
            slot,
            args: args.to_vec(),
        });

        let handler = self.overrides.read().get(&slot).cloned();
        if let Some(handler) = handler {
            tracing::trace!(member, "answered by override");
            return Ok(handler(args));
        }
        let target = self.target.read().clone();
        if let Some(target) = target {
            tracing::trace!(member, "forwarded to live target");
            return Ok(target.call(declared, args));
        }
        tracing::trace!(member, fallback = %declared.fallback, "answered by fallback");
        fallback_reply(declared)
    }

    /// Arguments of every recorded call to `member`, oldest first.
    pub fn calls(&self, member: &str) -> Vec<Vec<Value>> {
        let Some(&slot) = self.slots.get(member) else {
            return Vec::new();
        };
        self.calls
            .lock()
            .iter()
            .filter(|c| c.slot == slot)
            .map(|c| c.args.clone())
            .collect()
    }

    pub fn call_count(&self, member: &str) -> usize {
        let Some(&slot) = self.slots.get(member) else {
            return 0;
        };
        self.calls.lock().iter().filter(|c| c.slot == slot).count()
    }

    fn slot(&self, member: &str) -> Result<usize, RuntimeError> {
        self.slots
            .get(member)
            .copied()
            .ok_or_else(|| RuntimeError::UnknownMember {
                name: member.to_string(),
            })
    }
}

fn fallback_reply(member: &BlueprintMember) -> Result<Reply, RuntimeError> {
    let value = fallback_value(member, member.fallback, &member.return_type, None)?;
    let outs = member
        .parameters
        .iter()
        .filter_map(|p| p.fallback.map(|fallback| (p, fallback)))
        .map(|(p, fallback)| fallback_value(member, fallback, &p.ty, Some(&p.name)))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Reply { value, outs })
}

fn fallback_value(
    member: &BlueprintMember,
    fallback: ReturnFallback,
    ty: &TypeRef,
    parameter: Option<&str>,
) -> Result<Value, RuntimeError> {
    Ok(match fallback {
        ReturnFallback::Unit => Value::Unit,
        ReturnFallback::DefaultValue => Value::Default(member.resolve_type(ty)),
        ReturnFallback::Null => Value::Null,
        ReturnFallback::NewInstance => Value::Instance(member.resolve_type(ty)),
        ReturnFallback::FailFast => {
            return Err(RuntimeError::Unmocked(UnmockedMember {
                member: member.generated_name.clone(),
                original_name: member.original_name.clone(),
                declaring_type: member
                    .correspondence
                    .substitute_named(&member.declaring_type)
                    .render(),
                parameter: parameter.map(str::to_string),
            }))
        }
    })
}
