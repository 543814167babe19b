//! Definitions of Solidity functions called during deployment and configuration

use alloy_sol_types::sol;

sol! {
    /// The ProxyAdmin deployed alongside an OpenZeppelin TransparentUpgradeableProxy
    interface IProxyAdmin {
        function upgradeAndCall(address proxy, address implementation, bytes memory data) external payable;
        /// Only present on OpenZeppelin 4.x admins
        function upgrade(address proxy, address implementation) external;
    }

    interface IERC20 {
        function approve(address spender, uint256 value) external returns (bool);
    }

    /// The Snatch lottery contract
    interface ISnatch {
        struct PoolConfig {
            address paymentToken;
            uint256 singleDrawPrice;
            uint256 batchDrawPrice;
            uint256 batchDrawSize;
            address rarePrizeToken;
            uint256 rarePrizeInitRate;
            uint256 rarePrizeAvgRate;
            uint256 rarePrizeValue;
            uint256 rarePrizeMaxRP;
            address[] normalPrizesToken;
            uint256[] normalPrizesValue;
            uint256[] normalPrizesRate;
        }

        function createPool(PoolConfig memory config) external;
        function setRequestParameters(
            address airnode,
            bytes32 endpointIdUint256,
            bytes32 endpointIdUint256Array,
            address sponsorWallet
        ) external;
    }

    /// The FourDucks game, which only requests single random numbers
    interface IFourDucks {
        function setRequestParameters(
            address airnode,
            bytes32 endpointIdUint256,
            address sponsorWallet
        ) external;
    }
}
