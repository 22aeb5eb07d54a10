use common_constants::{FLASH_FACTORY_PARAMETER, SWAP_ROUTER_PARAMETER};
use common_structs::Protocol;

multiversx_sc::imports!();

/// Engine configuration read once per entry point.
///
/// Lives only for the duration of one call: handler bindings and registry parameters are
/// always read fresh at the start of an operation and never carried across transactions.
pub struct Cache<'a, C>
where
    C: crate::storage::Storage,
{
    sc_ref: &'a C,

    pub registry: ManagedAddress<C::Api>,
    pub fee_rate_bps: usize,
    pub fee_beneficiary: ManagedAddress<C::Api>,
    pub handlers: ManagedMapEncoded<C::Api, Protocol, ManagedAddress<C::Api>>,
    pub asset_decimals: ManagedMapEncoded<C::Api, EgldOrEsdtTokenIdentifier<C::Api>, usize>,
}

impl<'a, C> Cache<'a, C>
where
    C: crate::storage::Storage,
{
    pub fn new(sc_ref: &'a C) -> Self {
        Cache {
            sc_ref,
            registry: sc_ref.registry().get(),
            fee_rate_bps: sc_ref.fee_rate().get(),
            fee_beneficiary: sc_ref.fee_beneficiary().get(),
            handlers: ManagedMapEncoded::new(),
            asset_decimals: ManagedMapEncoded::new(),
        }
    }

    /// Handler bound to `protocol`, `None` when unbound.
    pub fn get_handler(&mut self, protocol: Protocol) -> Option<ManagedAddress<C::Api>> {
        if self.handlers.contains(&protocol) {
            return Some(self.handlers.get(&protocol));
        }

        let mapper = self.sc_ref.protocol_handler(protocol);
        if mapper.is_empty() {
            return None;
        }

        let handler = mapper.get();
        self.handlers.put(&protocol, &handler);
        Some(handler)
    }

    /// Registry decimals of `asset`; zero when the registry has none configured.
    pub fn get_asset_decimals(&mut self, asset: &EgldOrEsdtTokenIdentifier<C::Api>) -> usize {
        if self.asset_decimals.contains(asset) {
            return self.asset_decimals.get(asset);
        }

        let decimals = self
            .sc_ref
            .registry_asset_decimals(self.registry.clone(), asset)
            .get();
        self.asset_decimals.put(asset, &decimals);
        decimals
    }

    pub fn is_whitelisted(&self, asset: &EgldOrEsdtTokenIdentifier<C::Api>) -> bool {
        self.sc_ref
            .registry_whitelisted(self.registry.clone(), asset)
            .get()
    }

    pub fn flash_factory(&self) -> Option<ManagedAddress<C::Api>> {
        self.critical_parameter(FLASH_FACTORY_PARAMETER)
    }

    pub fn swap_router(&self) -> Option<ManagedAddress<C::Api>> {
        self.critical_parameter(SWAP_ROUTER_PARAMETER)
    }

    fn critical_parameter(&self, name: &[u8]) -> Option<ManagedAddress<C::Api>> {
        let mapper = self
            .sc_ref
            .registry_critical_parameter(self.registry.clone(), &ManagedBuffer::new_from_bytes(name));
        if mapper.is_empty() {
            None
        } else {
            Some(mapper.get())
        }
    }
}
